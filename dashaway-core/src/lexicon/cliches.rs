//! Tabela de clichês: expressão desgastada → alternativas diretas.
//!
//! Chaves em minúsculas. Uma lista vazia é válida: o trecho é marcado, mas
//! nenhuma troca é sugerida.

pub const CLICHES: &[(&str, &[&str])] = &[
    ("at the end of the day", &["ultimately", "in the end", "finally", "when all is said and done"]),
    ("all in this together", &["sharing this", "working on this as a group", "facing this jointly"]),
    ("think outside the box", &["think creatively", "try new approaches", "be inventive", "rethink"]),
    ("outside the box", &["unconventional", "creative", "original", "fresh"]),
    ("low-hanging fruit", &["easy wins", "quick gains", "simple tasks", "obvious targets"]),
    ("move the needle", &["make a difference", "have an impact", "change results", "matter"]),
    ("circle back", &["return to", "revisit", "follow up", "discuss later"]),
    ("touch base", &["talk", "check in", "contact", "meet briefly"]),
    ("game changer", &["breakthrough", "turning point", "major shift", "milestone"]),
    ("the bottom line", &["the result", "the main point", "the outcome", "in short"]),
    ("in today's fast-paced world", &["today", "now", "these days"]),
    ("in today’s fast-paced world", &["today", "now", "these days"]),
    ("in today's digital age", &["today", "now", "these days"]),
    ("in today’s digital age", &["today", "now", "these days"]),
    ("ever-evolving landscape", &["changing field", "shifting market", "moving target"]),
    ("ever-changing landscape", &["changing field", "shifting market", "moving target"]),
    ("at the heart of", &["central to", "behind", "the core of"]),
    ("a double-edged sword", &["a mixed blessing", "a trade-off", "both good and bad"]),
    ("only time will tell", &["we will see", "it remains unclear", "the result is unknown"]),
    ("last but not least", &["finally", "lastly", "also"]),
    ("needless to say", &["clearly", "obviously", "of course"]),
    ("easier said than done", &["hard to do", "difficult", "challenging"]),
    ("a perfect storm", &["a bad combination", "a crisis", "compounding problems"]),
    ("the tip of the iceberg", &["a small part", "only the beginning", "a fraction"]),
    ("raise the bar", &["set higher standards", "improve", "aim higher"]),
    ("push the envelope", &["test the limits", "innovate", "go further"]),
    ("hit the ground running", &["start quickly", "begin at full speed", "start strong"]),
    ("a level playing field", &["fair conditions", "equal footing", "a fair chance"]),
    ("the writing on the wall", &["clear signs", "a warning", "an obvious outcome"]),
    ("few and far between", &["rare", "scarce", "uncommon"]),
    ("when all is said and done", &["ultimately", "in the end", "finally"]),
    ("in the nick of time", &["just in time", "barely", "at the last moment"]),
    ("par for the course", &["normal", "expected", "typical", "usual"]),
    ("the new normal", &["the current situation", "how things are now", "the status quo"]),
    ("data is the new oil", &["data is valuable", "data drives value"]),
    ("table stakes", &["the minimum", "basic requirements", "the baseline"]),
    ("nothing short of", &["truly", "entirely", "clearly"]),
    ("make no mistake", &["clearly", "certainly", "to be clear"]),
    ("think big", &["aim high", "be ambitious"]),
    ("win-win", &["mutually beneficial", "good for both sides", "shared benefit"]),
    ("boil the ocean", &["overreach", "take on too much", "attempt everything"]),
    ("on the same page", &["in agreement", "aligned", "in sync"]),
    ("the elephant in the room", &["the obvious problem", "the unspoken issue"]),
    ("once upon a time", &["once", "formerly", "in the past"]),
    ("sum of its parts", &["its components", "its pieces"]),
    ("in a nutshell", &["briefly", "in short", "to summarize"]),
    ("every cloud has a silver lining", &["there is an upside", "something good may come of it"]),
    ("a whole new level", &["much further", "a higher standard", "a big step up"]),
    ("it goes without saying", &["clearly", "obviously", "of course"]),
    ("time is money", &["time is valuable", "delays are costly"]),
    ("best thing since sliced bread", &["a great invention", "very useful", "excellent"]),
    ("think on your feet", &["adapt quickly", "improvise", "react fast"]),
    ("back to the drawing board", &["start over", "rethink", "try again"]),
    ("reinvent the wheel", &["start from scratch", "duplicate effort", "redo existing work"]),
    ("in the grand scheme of things", &["overall", "in context", "broadly"]),
    ("seismic shift", &["major change", "big shift", "upheaval"]),
    ("final frontier", &["last challenge", "next step", "unexplored area"]),
    ("paint a picture", &["describe", "show", "explain"]),
    ("cutting corners", &[]),
];
