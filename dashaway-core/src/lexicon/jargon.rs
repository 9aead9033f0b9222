//! Tabela de jargão corporativo: termo → sugestões em linguagem simples.
//!
//! Chaves em minúsculas. A ordem das linhas não influencia a correspondência
//! (o compilador de padrões ordena as alternativas pelo tamanho).

pub const JARGON: &[(&str, &[&str])] = &[
    ("leverage", &["utilize", "take advantage of", "leveraging", "purchase", "leverage", "use"]),
    ("streamline", &["streamline", "simplify", "make more efficient", "improve"]),
    ("optimize", &["improve", "enhance", "refine", "optimise", "optimize"]),
    ("synergy", &["synergism", "teamwork", "combined effort", "collaboration", "synergy"]),
    ("robust", &["full-bodied", "racy", "strong", "durable", "rich", "robust", "reliable"]),
    ("scalable", &["adaptable", "flexible", "scalable", "expandable"]),
    ("end-to-end", &["complete", "comprehensive", "throughout", "full", "end-to-end"]),
    ("seamless", &["effortless", "seamless", "unlined", "uninterrupted", "smooth", "unseamed"]),
    ("state-of-the-art", &["cutting-edge", "modern", "advanced", "state-of-the-art"]),
    ("cutting-edge", &["innovative", "advanced", "leading", "cutting-edge", "up-to-date", "with-it"]),
    ("transformative", &["game-changing", "revolutionary", "life-changing"]),
    ("solution-oriented", &["problem-solving", "results-focused", "practical"]),
    ("holistic approach", &["integrated perspective", "comprehensive view", "all-encompassing strategy"]),
    ("user-centric", &["user-focused", "intuitive", "easy-to-use"]),
    ("paradigm shift", &["fundamental shift", "major change", "new way of thinking"]),
    ("game-changer", &["breakthrough", "milestone", "innovation"]),
    ("ecosystem", &["ecosystem", "environment", "community", "network"]),
    ("workflow", &["procedure", "workflow", "system", "process", "work flow"]),
    ("automate", &["automate", "automatise", "simplify", "streamline", "automatize", "computerize"]),
    ("orchestrate", &["organize", "orchestrate", "manage", "coordinate", "direct", "organise", "mastermind", "engineer"]),
    ("innovate", &["pioneer", "develop", "create", "introduce", "innovate"]),
    ("best practices", &["proven methods", "effective techniques", "standard procedures"]),
    ("actionable insights", &["concrete suggestions", "practical advice", "useful information"]),
    ("data-driven", &["analytical", "evidence-based", "fact-based"]),
    ("ai-powered", &["using AI", "with AI", "AI-assisted"]),
    ("next-generation", &["futuristic", "new", "advanced"]),
    ("real-time", &["live", "immediate", "instantaneous", "real-time"]),
    ("drive value", &["add worth", "generate returns", "create benefits"]),
    ("unlock potential", &["discover opportunities", "realize possibilities", "tap into strengths"]),
    ("empower", &["indue", "authorise", "endue", "endow", "empower", "support", "invest", "authorize", "enable", "gift"]),
    ("iterate", &["repeat", "retell", "iterate", "improve", "develop", "refine", "ingeminate", "restate", "reiterate"]),
    ("alignment", &["agreement", "conjunction", "coalition", "alinement", "coordination", "harmony", "alignment", "alliance"]),
    ("unlock new possibilities", &["discover new potential", "open up new avenues", "create new opportunities"]),
    ("enhanced", &["raise", "heighten", "enhance", "enhanced", "upgraded", "improved", "better"]),
    ("dynamic", &["energetic", "changing", "dynamical", "dynamic", "active", "moral force"]),
    ("integrate", &["mix", "integrate", "incorporate", "desegregate", "combine", "unify", "merge"]),
    ("modular", &["adaptable", "flexible", "customizable", "modular"]),
    ("turnkey solution", &["complete package", "ready-to-use system", "all-in-one solution"]),
    ("frictionless", &["effortless", "easy", "smooth", "frictionless"]),
    ("intelligent", &["intelligent", "well-informed", "advanced", "level-headed", "sound", "healthy", "levelheaded", "thinking", "smart", "reasoning", "clever"]),
    ("scalability", &["flexibility", "expandability", "scalability", "growth potential"]),
    ("disruptive", &["innovative", "revolutionary", "tumultuous", "groundbreaking", "troubled", "riotous", "disruptive", "turbulent"]),
    ("mission-critical", &["vital", "crucial", "essential"]),
    ("personalized experience", &["tailored interaction", "individualized approach", "customized service"]),
    ("granular control", &["precise oversight", "fine-tuned adjustments", "detailed management"]),
    ("cross-functional", &["team-based", "collaborative", "interdisciplinary"]),
    ("kpi-driven", &["data-backed", "performance-based", "results-oriented"]),
    ("context-aware", &["responsive", "intuitive", "adaptive"]),
    ("industry-leading", &["foremost", "premier", "top-tier"]),
    ("benchmark", &["point of reference", "guideline", "bench mark", "standard", "benchmark"]),
    ("framework", &["guideline", "theoretical account", "structure", "framework", "fabric", "system", "model"]),
    ("deployment", &["rollout", "launch", "implementation", "deployment"]),
    ("api-first", &["platform-based", "developer-focused", "integration-ready"]),
    ("plug-and-play", &["ready to go", "easy to install", "simple to use"]),
    ("hyperautomation", &["end-to-end automation", "advanced automation", "intelligent automation"]),
    ("digital transformation", &["modernization", "tech upgrade", "digitization"]),
    ("adaptive", &["responsive", "flexible", "adaptive", "adjustable", "adaptative"]),
    ("adoption curve", &["rate of acceptance", "user uptake", "adoption rate"]),
    ("agile methodology", &["flexible process", "agile development", "iterative approach"]),
    ("ai-first", &["AI-driven", "AI-centric", "AI-focused"]),
    ("automation", &["mechanisation", "automation", "automatic operation", "mechanization", "computerization"]),
    ("benchmarked", &["evaluated against", "measured against", "compared to"]),
    ("benchmarked against", &["evaluated against", "compared with", "measured against"]),
    ("benchmarking", &["evaluating", "comparing", "measuring"]),
    ("benchmarks", &["standards", "bench mark", "baselines", "reference points", "benchmark"]),
    ("best-fit solution", &["ideal solution", "most suitable option", "best choice"]),
    ("best-in-class", &["premier", "top-tier", "leading"]),
    ("best-in-class performance", &["excellent performance", "leading performance", "top-tier results"]),
    ("best-of-breed", &["premier", "leading", "top-of-the-line"]),
    ("best-value", &["optimal value", "best bargain", "most cost-effective"]),
    ("bias mitigation", &["countering bias", "reducing bias", "addressing prejudice"]),
    ("blueprint", &["blueprint", "draught", "design", "template", "outline", "plan", "draft", "pattern"]),
    ("business agility", &["flexibility", "adaptability", "responsiveness"]),
    ("business continuity", &["contingency planning", "operational resilience", "disaster recovery"]),
    ("business intelligence", &["business analytics", "market intelligence", "data analysis"]),
    ("capacity planning", &["capacity management", "resource planning", "workload management"]),
    ("chain-of-thought", &["thought process", "reasoning process", "logical steps"]),
    ("championing change", &["promoting change", "advocating for change", "leading change"]),
    ("change management", &["organizational change", "handling change", "managing transitions"]),
    ("closed weights", &["private model", "proprietary model", "non-public model"]),
    ("cloud architecture", &["cloud design", "cloud setup", "cloud infrastructure"]),
    ("cloud migration", &["cloud adoption", "cloud transition", "moving to the cloud"]),
    ("cloud-enabled", &["accessible from the cloud", "cloud-based", "cloud-powered"]),
    ("cloud-native", &["cloud-first", "built for the cloud", "designed for the cloud"]),
    ("collaborative approach", &["cooperative method", "joint effort", "team-based approach"]),
    ("collaborative framework", &["joint framework", "teamwork structure", "cooperative system"]),
    ("competitive advantage", &["upper hand", "strategic advantage", "edge"]),
    ("compliance", &["complaisance", "abidance", "conformity", "conformation", "compliance", "compliancy", "deference", "adherence", "obligingness", "observance", "submission"]),
    ("compliance audit", &["compliance review", "regulatory check", "adherence audit"]),
    ("compliant", &["adherent", "in compliance", "conformant", "compliant"]),
    ("comprehensive", &["all-inclusive", "complete", "comprehensive", "comp", "thorough", "comprehensive examination"]),
    ("context window", &["text capacity", "input limit", "prompt size"]),
    ("continuous delivery", &["automated deployment", "frequent releases", "continuous deployment"]),
    ("continuous deployment", &["frequent deployments", "automated releases", "continuous delivery"]),
    ("continuous improvement", &["ongoing enhancement", "iterative development", "constant improvement"]),
    ("continuous learning", &["ongoing education", "constant learning", "lifelong learning"]),
    ("core competency", &["key strength", "primary skill", "main expertise"]),
    ("custodianship", &["stewardship", "guardianship", "custodianship", "responsibility"]),
    ("customer journey", &["user flow", "user experience map", "customer path"]),
    ("customer-centric", &["customer-focused", "client-centered", "user-oriented"]),
    ("customer-focused", &["customer-centric", "client-centered", "user-oriented"]),
    ("data lake", &["data warehouse", "data repository", "data storage"]),
    ("data mesh", &["decentralized data architecture", "data network", "distributed data network"]),
    ("data migration", &["moving data", "data relocation", "data transfer"]),
    ("data pipeline", &["data flow", "data processing", "data workflow"]),
    ("deliver value", &["create worth", "provide benefits", "offer advantages"]),
    ("deliverables", &["results", "deliverable", "outcomes", "outputs"]),
    ("digital ecosystem", &["online platform", "digital environment", "interconnected services"]),
    ("digital enablement", &["digital assistance", "tech support", "digitization"]),
    ("digital maturity", &["digital readiness", "digital proficiency", "technological advancement"]),
    ("digital-first", &["online-focused", "digital-centric", "web-based"]),
    ("distillation", &["simplification", "summarization", "distillate", "knowledge transfer", "distillment", "distillation"]),
    ("drive engagement", &["increase participation", "boost interaction", "foster involvement"]),
    ("drive transformation", &["spearhead innovation", "drive change", "lead change"]),
    ("e2e (end-to-end)", &["complete", "comprehensive", "full"]),
    ("efficiency gains", &["time savings", "productivity improvements", "increased efficiency"]),
    ("elasticity", &["flexibility", "snap", "adaptability", "scalability", "elasticity"]),
    ("elevate", &["lift", "upgrade", "raise", "get up", "kick upstairs", "improve", "enhance", "advance", "promote", "bring up", "elevate"]),
    ("enable", &["enable", "permit", "allow", "facilitate"]),
    ("end-user experience", &["client experience", "customer experience", "user experience"]),
    ("experience optimization", &["improving user experience", "enhancing customer satisfaction", "optimizing interactions"]),
    ("explainability", &["transparency", "interpretability", "clarity"]),
    ("fact-checking pipeline", &["fact-checking system", "accuracy check", "verification process"]),
    ("feedback loop", &["iterative feedback", "improvement cycle", "review process"]),
    ("few-shot learning", &["sample-efficient learning", "few-example learning", "learning from a few examples"]),
    ("fine-tuning", &["adjustment", "polish", "tweak", "refine", "graduate", "down", "refinement", "customization", "fine-tune", "calibrate"]),
    ("foundation model", &["base model", "core model", "general-purpose model"]),
    ("future-proof", &["sustainable", "durable", "long-lasting"]),
    ("governance", &["government activity", "administration", "management", "control", "organisation", "government", "governing body", "brass", "governance", "governing", "establishment", "organization", "oversight"]),
    ("guardrails", &["limitations", "safety rail", "guardrail", "constraints", "safety measures"]),
    ("hallucination", &["delusion", "making things up", "fabrication", "hallucination", "inventing information"]),
    ("holistic", &["integrated", "all-encompassing", "comprehensive", "holistic"]),
    ("human-in-the-loop", &["human-supervised", "with human oversight", "human-assisted"]),
    ("hybrid cloud", &["multi-cloud setup", "hybrid infrastructure", "mixed cloud environment"]),
    ("implementation", &["implementation", "execution", "carrying out", "effectuation", "rollout", "application"]),
    ("inference latency", &["processing speed", "prediction delay", "response time"]),
    ("innovation pipeline", &["creativity workflow", "innovation process", "idea funnel"]),
    ("innovation strategy", &["innovation plan", "plan for new ideas", "creativity strategy"]),
    ("innovative", &["innovative", "advanced", "original", "modern", "innovational", "groundbreaking", "forward-looking", "new"]),
    ("insight-driven", &["analytical", "evidence-based", "data-informed"]),
    ("instruction tuning", &["instruction-based learning", "task-specific training", "fine-tuning with instructions"]),
    ("integration", &["merging", "combination", "unification", "consolidation", "integration", "integrating", "desegregation"]),
    ("intelligent automation", &["advanced automation", "smart automation", "AI-powered automation"]),
    ("interpretable ai", &["explainable AI", "understandable AI", "transparent AI"]),
    ("iteration", &["iteration", "looping", "loop", "cycle", "version", "repetition"]),
    ("key performance indicators", &["performance measures", "metrics", "KPIs"]),
    ("kpi framework", &["KPI structure", "measurement framework", "performance metrics system"]),
    ("legacy modernization", &["updating old systems", "modernizing technology", "system upgrade"]),
    ("llmops", &["LLM deployment", "managing LLMs", "large language model operations"]),
    ("long-term vision", &["future plan", "strategic vision", "long-range goal"]),
    ("lora adapters", &["LoRA fine-tuning", "low-rank adaptation", "model fine-tuning method"]),
    ("market disruption", &["market shift", "disruptive innovation", "industry shake-up"]),
    ("market-leading", &["best-in-market", "leading", "top-selling"]),
    ("maturity model", &["progression model", "development model", "growth framework"]),
    ("milestone-driven", &["goal-oriented", "results-focused", "project-based"]),
    ("mission-driven", &["goal-oriented", "purpose-driven", "values-based"]),
    ("model alignment", &["matching model behavior to human values", "AI safety", "value alignment"]),
    ("model weights", &["neural network weights", "model data", "model parameters"]),
    ("multimodal", &["multiple data types", "text, image, and audio", "mixed-media"]),
    ("on-premise", &["in-house", "on-site", "self-hosted"]),
    ("open weights", &["publicly available model", "open-source model", "shared model"]),
    ("operational excellence", &["efficiency", "optimal operations", "high performance"]),
    ("opportunity assessment", &["evaluating potential", "opportunity analysis", "viability study"]),
    ("optimization roadmap", &["optimization strategy", "refinement plan", "improvement plan"]),
    ("optimize processes", &["enhance processes", "improve workflows", "streamline operations"]),
    ("orchestration", &["management", "coordination", "orchestration", "instrumentation", "organization"]),
    ("outcome-oriented", &["success-based", "results-focused", "goal-driven"]),
    ("output filtering", &["result filtering", "content moderation", "output control"]),
    ("output token limit", &["response length limit", "token limit", "output size constraint"]),
    ("performance metrics", &["performance indicators", "KPIs", "success metrics"]),
    ("performance optimization", &["enhancing performance", "improving speed", "speeding up"]),
    ("personalization", &["individualization", "tailoring", "customization"]),
    ("platform-agnostic", &["universal", "cross-platform", "multi-platform"]),
    ("portfolio management", &["asset allocation", "project management", "investment management"]),
    ("predictive analytics", &["forecasting", "future trend analysis", "predictive modeling"]),
    ("process optimization", &["streamlining operations", "improving workflows", "enhancing processes"]),
    ("prompt engineering", &["writing effective prompts", "AI whispering", "prompt design"]),
    ("prompt injection", &["prompt hacking", "AI manipulation", "malicious prompt insertion"]),
    ("prompt leakage", &["prompt exposure", "system prompt leak", "revealing system prompts"]),
    ("quantization", &["quantization", "model compression", "reducing model size", "model optimization", "quantisation"]),
    ("real-time analytics", &["instant insights", "real-time data", "live data analysis"]),
    ("red-teaming", &["ethical hacking", "simulated attack", "adversarial testing"]),
    ("redundancy", &["redundance", "backup", "failover", "duplication", "redundancy"]),
    ("resilience", &["fault tolerance", "resilience", "robustness", "resiliency", "durability"]),
    ("resource allocation", &["distributing assets", "resource management", "assigning resources"]),
    ("responsible ai", &["trustworthy AI", "ethical AI", "safe AI"]),
    ("responsive", &["quick to react", "reactive", "responsive", "antiphonal", "flexible", "adaptive"]),
    ("results-driven", &["performance-based", "goal-oriented", "outcome-focused"]),
    ("retrieval-augmented generation", &["RAG", "knowledge-based generation", "retrieval-based generation"]),
    ("return on investment", &["cost-benefit analysis", "profitability", "ROI"]),
    ("revolutionary", &["innovative", "rotatory", "radical", "subverter", "revolutionary", "groundbreaking", "revolutionist", "transformative", "subversive"]),
    ("risk assessment", &["evaluating risks", "risk analysis", "threat assessment"]),
    ("risk mitigation", &["reducing risk", "risk management", "minimizing threats"]),
    ("roadmap", &["timeline", "strategy", "plan"]),
    ("roi", &["profitability", "return on investment", "return on invested capital", "cost-benefit analysis", "ROI"]),
    ("safety review", &["security audit", "risk assessment", "safety check"]),
    ("safety system", &["safety feature", "protection mechanism", "security system"]),
    ("scalability assessment", &["scalability analysis", "evaluating growth potential", "performance testing"]),
    ("scalability testing", &["performance testing", "load testing", "stress testing"]),
    ("scalable infrastructure", &["flexible architecture", "growable infrastructure", "expandable system"]),
    ("scalable model", &["adaptable model", "flexible model", "expandable model"]),
    ("seamless integration", &["smooth combination", "effortless connection", "easy integration"]),
    ("seamless transition", &["easy transition", "effortless switch", "smooth changeover"]),
    ("self-consistency", &["logical coherence", "reasoning check", "internal consistency"]),
    ("service excellence", &["excellent customer service", "top-quality support", "outstanding service"]),
    ("short-term wins", &["quick victories", "immediate gains", "early successes"]),
    ("single pane of glass", &["single interface", "unified view", "centralized dashboard"]),
    ("sla (service level agreement)", &["performance agreement", "service contract", "SLA"]),
    ("smart solutions", &["intelligent systems", "innovative technology", "advanced solutions"]),
    ("solution stack", &["tech stack", "technology stack", "software suite"]),
    ("sprints", &["sprint", "short development cycles", "agile sprints", "iterative development", "dash"]),
    ("stack agnostic", &["technology-neutral", "flexible stack", "platform-independent"]),
    ("stakeholder alignment", &["shared understanding", "stakeholder consensus", "getting everyone on the same page"]),
    ("stakeholder engagement", &["involving interested parties", "stakeholder communication", "working with stakeholders"]),
    ("stakeholder management", &["managing relationships", "working with interested parties", "stakeholder communication"]),
    ("strategic partnership", &["alliance", "collaboration", "joint venture"]),
    ("strategic roadmap", &["long-term plan", "future direction", "strategic plan"]),
    ("streamlined process", &["efficient workflow", "smooth operation", "simplified process"]),
    ("synergize", &["collaborate", "combine efforts", "work together"]),
    ("synthetic data", &["fake data", "generated data", "artificial data"]),
    ("system prompt", &["initial instruction", "system message", "starting prompt"]),
    ("technical debt", &["future development costs", "rework needed", "code quality issues"]),
    ("technology partner", &["technology provider", "tech collaborator", "IT partner"]),
    ("technology stack", &["development stack", "software stack", "tech tools"]),
    ("thought leadership", &["influential ideas", "expert opinion", "industry expertise"]),
    ("token efficiency", &["efficient tokenization", "optimizing token usage", "reducing token count"]),
    ("total cost of ownership", &["TCO", "long-term cost", "overall expense"]),
    ("transform", &["transform", "alter", "transmute", "metamorphose", "transubstantiate", "change", "translate", "convert"]),
    ("transformation journey", &["development path", "process of change", "evolution"]),
    ("transparency", &["transparence", "honesty", "foil", "transparentness", "openness", "transparency", "clarity"]),
    ("unlock new opportunities", &["discover new potential", "create new possibilities", "open up new avenues"]),
    ("unlock value", &["add worth", "generate returns", "create benefits"]),
    ("uplift", &["uplift", "upthrow", "lift up", "pick up", "boost", "upheaval", "intoxicate", "improvement", "elate", "increase", "upthrust"]),
    ("uptime guarantee", &["reliability promise", "uptime promise", "service availability guarantee"]),
    ("user journey", &["user flow", "user experience map", "customer path"]),
    ("value proposition", &["unique selling point", "what you offer", "key benefit"]),
    ("visibility", &["visibleness", "insight", "profile", "awareness", "visibility", "transparency"]),
    ("world-class", &["foremost", "first", "outstanding", "excellent", "top-tier", "world-class"]),
    ("zero-shot learning", &["unseen task generalization", "zero-example learning", "learning without examples"]),
];
