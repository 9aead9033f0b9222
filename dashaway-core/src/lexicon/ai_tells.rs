//! Tabela de marcadores de texto gerado por IA: frase → reescritas.
//!
//! Chaves em minúsculas. Variantes com apóstrofo tipográfico (`’`) aparecem
//! como chaves próprias, pois a busca de sugestões compara o texto exato.

pub const AI_TELLS: &[(&str, &[&str])] = &[
    ("furthermore", &["also", "and", "besides", "plus"]),
    ("moreover", &["also", "and", "besides", "what's more"]),
    ("additionally", &["also", "and", "plus", "too"]),
    ("consequently", &["so", "as a result", "therefore"]),
    ("in conclusion", &["finally", "to sum up", "in short", "overall"]),
    ("in summary", &["in short", "briefly", "to sum up", "overall"]),
    ("it's important to note that", &["note that", "remember that", "keep in mind that", "importantly"]),
    ("it’s important to note that", &["note that", "remember that", "keep in mind that", "importantly"]),
    ("it's important to note", &["note", "remember", "keep in mind"]),
    ("it’s important to note", &["note", "remember", "keep in mind"]),
    ("it is important to note that", &["note that", "remember that", "keep in mind that", "importantly"]),
    ("it's worth noting that", &["note that", "notably", "also"]),
    ("it’s worth noting that", &["note that", "notably", "also"]),
    ("it is worth noting that", &["note that", "notably", "also"]),
    ("it's critical to", &["we must", "you need to", "it matters to"]),
    ("it’s critical to", &["we must", "you need to", "it matters to"]),
    ("delve into", &["explore", "examine", "look at", "dig into"]),
    ("delve", &["explore", "examine", "study", "dig"]),
    ("dive into", &["explore", "look at", "examine", "start with"]),
    ("let's dive in", &["let's start", "here's how", "to begin"]),
    ("let’s dive in", &["let’s start", "here’s how", "to begin"]),
    ("tapestry", &["mix", "blend", "range", "collection"]),
    ("testament to", &["proof of", "evidence of", "a sign of", "shows"]),
    ("navigate the complexities", &["handle the details", "work through the challenges", "manage the difficulties"]),
    ("in the realm of", &["in", "within", "in the field of"]),
    ("realm", &["field", "area", "domain", "world"]),
    ("embark on a journey", &["start", "begin", "set out"]),
    ("unleash the power of", &["use", "make the most of", "apply"]),
    ("unlock the power of", &["use", "make the most of", "apply"]),
    ("harness the power of", &["use", "make the most of", "apply"]),
    ("a rich tapestry", &["a wide variety", "a mix", "a broad range"]),
    ("plays a crucial role", &["matters", "is key", "is important", "helps"]),
    ("plays a pivotal role", &["matters", "is key", "is important", "helps"]),
    ("pivotal", &["key", "central", "important", "critical"]),
    ("crucial", &["key", "vital", "important", "essential"]),
    ("meticulous", &["careful", "thorough", "precise", "detailed"]),
    ("meticulously", &["carefully", "thoroughly", "precisely"]),
    ("underscore", &["stress", "highlight", "show", "emphasize"]),
    ("underscores", &["stresses", "highlights", "shows", "emphasizes"]),
    ("showcase", &["show", "display", "present", "feature"]),
    ("showcases", &["shows", "displays", "presents", "features"]),
    ("foster", &["encourage", "build", "support", "grow"]),
    ("bolster", &["support", "strengthen", "boost", "reinforce"]),
    ("intricate", &["complex", "detailed", "involved", "complicated"]),
    ("multifaceted", &["complex", "varied", "many-sided", "diverse"]),
    ("ever-evolving", &["changing", "shifting", "developing"]),
    ("landscape", &["field", "market", "scene", "area"]),
    ("undoubtedly", &["certainly", "clearly", "surely"]),
    ("arguably", &["perhaps", "possibly", "maybe"]),
    ("notably", &["especially", "in particular", "mainly"]),
    ("paramount", &["essential", "vital", "top", "most important"]),
    ("utilize", &["use", "apply", "employ"]),
    ("utilization", &["use", "usage", "application"]),
    ("commendable", &["admirable", "praiseworthy", "good"]),
    ("i hope this helps", &[]),
    ("as an ai language model", &[]),
    ("as an ai", &[]),
    ("let me know if you need more", &[]),
    ("feel free to", &["you can", "please", "go ahead and"]),
    ("not only", &["both", "as well as"]),
    ("in essence", &["basically", "essentially", "in short"]),
    ("going forward", &["from now on", "in future", "next"]),
    ("at its core", &["basically", "fundamentally", "essentially"]),
    ("a testament to", &["proof of", "evidence of", "a sign of"]),
    ("stands as a", &["is a", "remains a", "serves as a"]),
    ("serves as a", &["is a", "acts as a", "works as a"]),
    ("a myriad of", &["many", "countless", "lots of", "a range of"]),
    ("myriad", &["many", "countless", "numerous"]),
    ("journey", &["process", "path", "experience", "progress"]),
];
