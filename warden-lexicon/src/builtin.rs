//! Built-in lexicon tables compiled into the binary.
//!
//! The severity table is kept exactly as curated, duplicates included
//! ("ugly", "worthless", "loser", "nobody", "unwanted", ...). Duplicate
//! handling is decided at load time by the configured policy.

/// Negative phrases and their severity weights.
pub static SEVERITY_ENTRIES: &[(&str, f64)] = &[
    ("stupid", -0.3), ("dumb", -0.3), ("annoying", -0.3), ("idiot", -0.3), ("loser", -0.3),
    ("ugly", -0.8), ("hate", -0.6), ("worthless", -0.8), ("lame", -0.3), ("embarrassing", -0.3),
    ("failure", -0.3), ("talentless", -0.3), ("weak", -0.3), ("hideous", -0.3), ("gross", -0.3),
    ("fat", -0.3), ("clueless", -0.3), ("brainless", -0.3), ("pathetic", -0.3), ("useless", -0.3),
    ("lonely", -0.3), ("unpopular", -0.3), ("unwanted", -0.3), ("disappear", -0.3),
    ("disgusting", -0.3), ("fake", -0.3), ("terrible", -0.3), ("cheat", -0.3), ("fuck", -1.0),
    ("gay", -1.0), ("ass", -1.0), ("shit", -1.0), ("whore", -1.5), ("slut", -1.5),
    ("bitch", -1.5), ("pussy", -0.3), ("die", -1.5), ("kill", -1.5), ("trash", -0.3),
    ("garbage", -0.3), ("cringe", -0.3), ("dumbass", -0.3), ("scum", -0.3), ("fail", -0.3),
    ("awful", -0.3), ("toxic", -0.3), ("clown", -0.3), ("stinks", -0.3), ("waste", -0.3),
    ("losers", -0.3), ("bozo", -0.3), ("coward", -0.3), ("weirdo", -0.3), ("dipshit", -0.3),
    ("fatass", -0.3), ("nobody", -0.3), ("moron", -0.3), ("idiotic", -0.3), ("spineless", -0.3),
    ("incompetent", -0.3), ("ridiculous", -0.3), ("foolish", -0.3), ("dunce", -0.3),
    ("imbecile", -0.3), ("dimwit", -0.3), ("simpleton", -0.3), ("asshole", -0.3),
    ("bitchass", -0.3), ("dick", -0.3), ("fucking", -0.3), ("motherfucker", -0.3),
    ("nasty", -0.3), ("pig", -0.3), ("uninstall", -0.3), ("creepy", -0.3), ("scumbag", -0.3),
    ("cheater", -0.3), ("unloved", -0.3), ("unwanted", -0.3), ("broke", -0.3), ("smelly", -0.3),
    ("creature", -0.3), ("joke", -0.3), ("lowlife", -0.3), ("rat", -0.3),
    ("kill yourself", -0.3), ("loser", -0.3), ("nobody", -0.3), ("ugly", -0.3),
    ("worthless", -0.3), ("disgusting", -0.3), ("freak", -0.3), ("sick", -0.3),
    ("pathetic", -0.3), ("disgrace", -0.3), ("wretched", -0.3), ("sickening", -0.3),
    ("repulsive", -0.3), ("detestable", -0.3), ("abominable", -0.3), ("vile", -0.3),
    ("no one likes you", -0.3), ("nobody cares", -0.3), ("go die", -0.3), ("shut up", -0.3),
    ("get lost", -0.3), ("go away", -0.3), ("waste of space", -0.3), ("walking L", -0.3),
    ("drop out", -0.3), ("go cry", -0.3), ("stop talking", -0.3), ("just quit", -0.3),
    ("your mom", -0.3), ("poor", -0.3), ("failure at life", -0.3), ("so annoying", -0.3),
    ("hate you", -0.3), ("why are you here", -0.3), ("disease", -0.3), ("social suicide", -0.3),
    ("cringe af", -0.3), ("walking disaster", -0.3), ("born on a highway", -0.3),
    ("should be illegal", -0.3), ("mental case", -0.3), ("go choke", -0.3),
    ("too dumb to live", -0.3), ("choke on", -0.3), ("dumbest person", -0.3),
    ("disappointment", -0.3), ("busted", -0.3), ("rotten", -0.3), ("clapped", -0.3),
    ("bald", -0.3), ("gremlin", -0.3), ("lard", -0.3), ("toothpick", -0.3), ("snitch", -0.3),
    ("wannabe", -0.3), ("poser", -0.3), ("zero purpose", -0.3), ("waste of air", -0.3),
    ("reject", -0.3), ("bot", -0.3), ("get wrecked", -0.3), ("you suck", -0.3),
    ("shithead", -0.3), ("dickhead", -0.3), ("jackass", -0.3), ("bastard", -0.3),
    ("motherfucker", -0.3), ("cocksucker", -0.3), ("cock", -0.3), ("douche", -0.3),
    ("douchebag", -0.3), ("prick", -0.3), ("twat", -0.3), ("ballsack", -0.3), ("nutsack", -0.3),
    ("tit", -0.3), ("tits", -0.3), ("nipple", -0.3), ("hella", -0.3), ("bullshit", -0.3),
    ("horse shit", -0.3), ("piss", -0.3), ("pissed", -0.3), ("pissed off", -0.3),
    ("son of a bitch", -0.3), ("bitching", -0.3), ("screw you", -0.3), ("suck my", -0.3),
    ("sucking", -0.3), ("lick me", -0.3), ("dickwad", -0.3), ("dickface", -0.3),
    ("asswipe", -0.3), ("shitshow", -0.3), ("fuckwit", -0.3), ("twatwaffle", -0.3),
    ("cunt", -1.5), ("pussyass", -0.3), ("assclown", -0.3), ("shitbag", -0.3),
    ("fuckface", -0.3), ("retard", -0.8),
];

/// Positive adjectives, used only as a membership test.
pub static POSITIVE_ADJECTIVES: &[&str] = &[
    "amazing", "awesome", "brilliant", "excellent", "fantastic", "great", "incredible",
    "outstanding", "perfect", "phenomenal", "remarkable", "spectacular", "superb", "terrific",
    "wonderful", "beautiful", "brave", "bright", "calm", "cheerful", "clever", "confident",
    "creative", "determined", "energetic", "friendly", "generous", "gentle", "happy", "helpful",
    "honest", "intelligent", "kind", "loving", "loyal", "patient", "peaceful", "polite",
    "powerful", "proud", "reliable", "respectful", "responsible", "sincere", "smart", "strong",
    "successful", "talented", "thoughtful", "trustworthy", "wise", "witty", "worthy",
    "admirable", "adorable", "agreeable", "charming", "courageous", "dedicated", "diligent",
    "elegant", "enthusiastic", "excited", "faithful", "fearless", "graceful", "grateful",
    "heroic", "hopeful", "humble", "inspiring", "joyful", "magnificent", "marvelous", "noble",
    "optimistic", "passionate", "radiant", "splendid", "stellar", "supportive", "tender",
    "thoughtful", "triumphant", "valiant", "valuable", "vibrant", "victorious", "virtuous",
    "warm", "welcome", "worthy", "zealous",
];
