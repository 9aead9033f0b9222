//! Contagem de problemas por categoria.
//!
//! Cada segmento não-texto conta uma vez na sua categoria. São esses os
//! contadores que a camada de persistência acumula por usuário e no total.

use serde::{Deserialize, Serialize};

use crate::category::IssueCategory;
use crate::segmenter::Segment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub em_dash: usize,
    pub cliche: usize,
    pub jargon: usize,
    pub ai_tell: usize,
}

impl IssueCounts {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut counts = Self::default();
        for category in segments.iter().filter_map(|s| s.kind.category()) {
            counts.add(category);
        }
        counts
    }

    pub fn add(&mut self, category: IssueCategory) {
        *self.slot(category) += 1;
    }

    pub fn get(&self, category: IssueCategory) -> usize {
        match category {
            IssueCategory::EmDash => self.em_dash,
            IssueCategory::Cliche => self.cliche,
            IssueCategory::Jargon => self.jargon,
            IssueCategory::AiTell => self.ai_tell,
        }
    }

    pub fn total(&self) -> usize {
        self.em_dash + self.cliche + self.jargon + self.ai_tell
    }

    fn slot(&mut self, category: IssueCategory) -> &mut usize {
        match category {
            IssueCategory::EmDash => &mut self.em_dash,
            IssueCategory::Cliche => &mut self.cliche,
            IssueCategory::Jargon => &mut self.jargon,
            IssueCategory::AiTell => &mut self.ai_tell,
        }
    }
}

impl std::ops::AddAssign for IssueCounts {
    fn add_assign(&mut self, other: Self) {
        for category in IssueCategory::ALL {
            *self.slot(category) += other.get(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SegmentKind;

    fn seg(kind: SegmentKind) -> Segment {
        Segment {
            kind,
            content: "x".into(),
            suggestions: vec![],
        }
    }

    #[test]
    fn test_counts_one_per_issue_segment() {
        let segments = vec![
            seg(SegmentKind::Text),
            seg(SegmentKind::Jargon),
            seg(SegmentKind::Text),
            seg(SegmentKind::Jargon),
            seg(SegmentKind::EmDash),
            seg(SegmentKind::AiTell),
        ];
        let counts = IssueCounts::from_segments(&segments);

        assert_eq!(counts.jargon, 2);
        assert_eq!(counts.em_dash, 1);
        assert_eq!(counts.ai_tell, 1);
        assert_eq!(counts.cliche, 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut total = IssueCounts::default();
        total += IssueCounts {
            em_dash: 1,
            cliche: 2,
            jargon: 0,
            ai_tell: 3,
        };
        total += IssueCounts {
            em_dash: 1,
            ..Default::default()
        };
        assert_eq!(total.get(IssueCategory::EmDash), 2);
        assert_eq!(total.total(), 7);
    }
}
