//! Static English word tables.
//!
//! Generated from the BIP-39 English wordlist. Each word is split into its
//! first letter (`PREFIX1`), second letter (`PREFIX2`) and the remaining
//! suffix (`SUFFIXES`). The prefix tables only record the index where a new
//! letter starts; every index up to the next entry shares that letter.

use super::IndexChar;

/// Number of entries in [`PREFIX1`].
pub const PREFIX1_LEN: usize = 25;

/// Number of entries in [`PREFIX2`].
pub const PREFIX2_LEN: usize = 200;

/// First-letter boundaries, ordered by word index.
pub static PREFIX1: [IndexChar; PREFIX1_LEN] = [
    IndexChar::new(0, b'a'),
    IndexChar::new(136, b'b'),
    IndexChar::new(253, b'c'),
    IndexChar::new(439, b'd'),
    IndexChar::new(551, b'e'),
    IndexChar::new(651, b'f'),
    IndexChar::new(757, b'g'),
    IndexChar::new(833, b'h'),
    IndexChar::new(897, b'i'),
    IndexChar::new(952, b'j'),
    IndexChar::new(972, b'k'),
    IndexChar::new(992, b'l'),
    IndexChar::new(1068, b'm'),
    IndexChar::new(1173, b'n'),
    IndexChar::new(1214, b'o'),
    IndexChar::new(1269, b'p'),
    IndexChar::new(1401, b'q'),
    IndexChar::new(1409, b'r'),
    IndexChar::new(1517, b's'),
    IndexChar::new(1767, b't'),
    IndexChar::new(1888, b'u'),
    IndexChar::new(1923, b'v'),
    IndexChar::new(1969, b'w'),
    IndexChar::new(2038, b'y'),
    IndexChar::new(2044, b'z'),
];

/// Second-letter boundaries, ordered by word index.
pub static PREFIX2: [IndexChar; PREFIX2_LEN] = [
    IndexChar::new(0, b'b'),
    IndexChar::new(10, b'c'),
    IndexChar::new(24, b'd'),
    IndexChar::new(33, b'e'),
    IndexChar::new(34, b'f'),
    IndexChar::new(37, b'g'),
    IndexChar::new(41, b'h'),
    IndexChar::new(42, b'i'),
    IndexChar::new(46, b'l'),
    IndexChar::new(61, b'm'),
    IndexChar::new(66, b'n'),
    IndexChar::new(82, b'p'),
    IndexChar::new(88, b'r'),
    IndexChar::new(106, b's'),
    IndexChar::new(113, b't'),
    IndexChar::new(119, b'u'),
    IndexChar::new(126, b'v'),
    IndexChar::new(129, b'w'),
    IndexChar::new(135, b'x'),
    IndexChar::new(136, b'a'),
    IndexChar::new(155, b'e'),
    IndexChar::new(175, b'i'),
    IndexChar::new(183, b'l'),
    IndexChar::new(197, b'o'),
    IndexChar::new(214, b'r'),
    IndexChar::new(234, b'u'),
    IndexChar::new(253, b'a'),
    IndexChar::new(295, b'e'),
    IndexChar::new(302, b'h'),
    IndexChar::new(327, b'i'),
    IndexChar::new(333, b'l'),
    IndexChar::new(357, b'o'),
    IndexChar::new(398, b'r'),
    IndexChar::new(427, b'u'),
    IndexChar::new(438, b'y'),
    IndexChar::new(439, b'a'),
    IndexChar::new(449, b'e'),
    IndexChar::new(487, b'i'),
    IndexChar::new(514, b'o'),
    IndexChar::new(527, b'r'),
    IndexChar::new(542, b'u'),
    IndexChar::new(549, b'w'),
    IndexChar::new(550, b'y'),
    IndexChar::new(551, b'a'),
    IndexChar::new(559, b'c'),
    IndexChar::new(562, b'd'),
    IndexChar::new(565, b'f'),
    IndexChar::new(566, b'g'),
    IndexChar::new(567, b'i'),
    IndexChar::new(569, b'l'),
    IndexChar::new(578, b'm'),
    IndexChar::new(586, b'n'),
    IndexChar::new(607, b'p'),
    IndexChar::new(608, b'q'),
    IndexChar::new(610, b'r'),
    IndexChar::new(616, b's'),
    IndexChar::new(620, b't'),
    IndexChar::new(622, b'v'),
    IndexChar::new(626, b'x'),
    IndexChar::new(649, b'y'),
    IndexChar::new(651, b'a'),
    IndexChar::new(673, b'e'),
    IndexChar::new(685, b'i'),
    IndexChar::new(705, b'l'),
    IndexChar::new(720, b'o'),
    IndexChar::new(739, b'r'),
    IndexChar::new(751, b'u'),
    IndexChar::new(757, b'a'),
    IndexChar::new(774, b'e'),
    IndexChar::new(780, b'h'),
    IndexChar::new(781, b'i'),
    IndexChar::new(788, b'l'),
    IndexChar::new(800, b'o'),
    IndexChar::new(810, b'r'),
    IndexChar::new(826, b'u'),
    IndexChar::new(832, b'y'),
    IndexChar::new(833, b'a'),
    IndexChar::new(848, b'e'),
    IndexChar::new(859, b'i'),
    IndexChar::new(866, b'o'),
    IndexChar::new(884, b'u'),
    IndexChar::new(896, b'y'),
    IndexChar::new(897, b'c'),
    IndexChar::new(899, b'd'),
    IndexChar::new(902, b'g'),
    IndexChar::new(903, b'l'),
    IndexChar::new(906, b'm'),
    IndexChar::new(914, b'n'),
    IndexChar::new(946, b'r'),
    IndexChar::new(947, b's'),
    IndexChar::new(950, b't'),
    IndexChar::new(951, b'v'),
    IndexChar::new(952, b'a'),
    IndexChar::new(956, b'e'),
    IndexChar::new(960, b'o'),
    IndexChar::new(965, b'u'),
    IndexChar::new(972, b'a'),
    IndexChar::new(973, b'e'),
    IndexChar::new(977, b'i'),
    IndexChar::new(988, b'n'),
    IndexChar::new(992, b'a'),
    IndexChar::new(1012, b'e'),
    IndexChar::new(1030, b'i'),
    IndexChar::new(1047, b'o'),
    IndexChar::new(1061, b'u'),
    IndexChar::new(1067, b'y'),
    IndexChar::new(1068, b'a'),
    IndexChar::new(1101, b'e'),
    IndexChar::new(1122, b'i'),
    IndexChar::new(1139, b'o'),
    IndexChar::new(1160, b'u'),
    IndexChar::new(1170, b'y'),
    IndexChar::new(1173, b'a'),
    IndexChar::new(1180, b'e'),
    IndexChar::new(1195, b'i'),
    IndexChar::new(1197, b'o'),
    IndexChar::new(1210, b'u'),
    IndexChar::new(1214, b'a'),
    IndexChar::new(1215, b'b'),
    IndexChar::new(1222, b'c'),
    IndexChar::new(1225, b'd'),
    IndexChar::new(1226, b'f'),
    IndexChar::new(1230, b'i'),
    IndexChar::new(1231, b'k'),
    IndexChar::new(1232, b'l'),
    IndexChar::new(1235, b'm'),
    IndexChar::new(1236, b'n'),
    IndexChar::new(1241, b'p'),
    IndexChar::new(1246, b'r'),
    IndexChar::new(1255, b's'),
    IndexChar::new(1256, b't'),
    IndexChar::new(1257, b'u'),
    IndexChar::new(1261, b'v'),
    IndexChar::new(1264, b'w'),
    IndexChar::new(1266, b'x'),
    IndexChar::new(1267, b'y'),
    IndexChar::new(1268, b'z'),
    IndexChar::new(1269, b'a'),
    IndexChar::new(1294, b'e'),
    IndexChar::new(1308, b'h'),
    IndexChar::new(1312, b'i'),
    IndexChar::new(1326, b'l'),
    IndexChar::new(1336, b'o'),
    IndexChar::new(1355, b'r'),
    IndexChar::new(1384, b'u'),
    IndexChar::new(1400, b'y'),
    IndexChar::new(1401, b'u'),
    IndexChar::new(1409, b'a'),
    IndexChar::new(1430, b'e'),
    IndexChar::new(1478, b'h'),
    IndexChar::new(1479, b'i'),
    IndexChar::new(1495, b'o'),
    IndexChar::new(1510, b'u'),
    IndexChar::new(1517, b'a'),
    IndexChar::new(1536, b'c'),
    IndexChar::new(1551, b'e'),
    IndexChar::new(1574, b'h'),
    IndexChar::new(1597, b'i'),
    IndexChar::new(1616, b'k'),
    IndexChar::new(1623, b'l'),
    IndexChar::new(1635, b'm'),
    IndexChar::new(1640, b'n'),
    IndexChar::new(1645, b'o'),
    IndexChar::new(1666, b'p'),
    IndexChar::new(1691, b'q'),
    IndexChar::new(1694, b't'),
    IndexChar::new(1727, b'u'),
    IndexChar::new(1752, b'w'),
    IndexChar::new(1763, b'y'),
    IndexChar::new(1767, b'a'),
    IndexChar::new(1780, b'e'),
    IndexChar::new(1790, b'h'),
    IndexChar::new(1805, b'i'),
    IndexChar::new(1816, b'o'),
    IndexChar::new(1844, b'r'),
    IndexChar::new(1872, b'u'),
    IndexChar::new(1880, b'w'),
    IndexChar::new(1886, b'y'),
    IndexChar::new(1888, b'g'),
    IndexChar::new(1889, b'm'),
    IndexChar::new(1890, b'n'),
    IndexChar::new(1908, b'p'),
    IndexChar::new(1914, b'r'),
    IndexChar::new(1916, b's'),
    IndexChar::new(1922, b't'),
    IndexChar::new(1923, b'a'),
    IndexChar::new(1935, b'e'),
    IndexChar::new(1946, b'i'),
    IndexChar::new(1962, b'o'),
    IndexChar::new(1969, b'a'),
    IndexChar::new(1985, b'e'),
    IndexChar::new(1997, b'h'),
    IndexChar::new(2005, b'i'),
    IndexChar::new(2022, b'o'),
    IndexChar::new(2032, b'r'),
    IndexChar::new(2038, b'a'),
    IndexChar::new(2039, b'e'),
    IndexChar::new(2041, b'o'),
    IndexChar::new(2044, b'e'),
    IndexChar::new(2046, b'o'),
];

/// Word suffixes (letters from position 2 onward), indexed by word index.
pub static SUFFIXES: [&str; 2048] = [
    "andon", "ility", "le", "out", "ove", "sent", "sorb", "stract",
    "surd", "use", "cess", "cident", "count", "cuse", "hieve", "id",
    "oustic", "quire", "ross", "t", "tion", "tor", "tress", "tual",
    "apt", "d", "dict", "dress", "just", "mit", "ult", "vance",
    "vice", "robic", "fair", "ford", "raid", "ain", "e", "ent",
    "ree", "ead", "m", "r", "rport", "sle", "arm", "bum",
    "cohol", "ert", "ien", "l", "ley", "low", "most", "one",
    "pha", "ready", "so", "ter", "ways", "ateur", "azing", "ong",
    "ount", "used", "alyst", "chor", "cient", "ger", "gle", "gry",
    "imal", "kle", "nounce", "nual", "other", "swer", "tenna", "tique",
    "xiety", "y", "art", "ology", "pear", "ple", "prove", "ril",
    "ch", "ctic", "ea", "ena", "gue", "m", "med", "mor",
    "my", "ound", "range", "rest", "rive", "row", "t", "tefact",
    "tist", "twork", "k", "pect", "sault", "set", "sist", "sume",
    "thma", "hlete", "om", "tack", "tend", "titude", "tract", "ction",
    "dit", "gust", "nt", "thor", "to", "tumn", "erage", "ocado",
    "oid", "ake", "are", "ay", "esome", "ful", "kward", "is",
    "by", "chelor", "con", "dge", "g", "lance", "lcony", "ll",
    "mboo", "nana", "nner", "r", "rely", "rgain", "rrel", "se",
    "sic", "sket", "ttle", "ach", "an", "auty", "cause", "come",
    "ef", "fore", "gin", "have", "hind", "lieve", "low", "lt",
    "nch", "nefit", "st", "tray", "tter", "tween", "yond", "cycle",
    "d", "ke", "nd", "ology", "rd", "rth", "tter", "ack",
    "ade", "ame", "anket", "ast", "eak", "ess", "ind", "ood",
    "ossom", "ouse", "ue", "ur", "ush", "ard", "at", "dy",
    "il", "mb", "ne", "nus", "ok", "ost", "rder", "ring",
    "rrow", "ss", "ttom", "unce", "x", "y", "acket", "ain",
    "and", "ass", "ave", "ead", "eeze", "ick", "idge", "ief",
    "ight", "ing", "isk", "occoli", "oken", "onze", "oom", "other",
    "own", "ush", "bble", "ddy", "dget", "ffalo", "ild", "lb",
    "lk", "llet", "ndle", "nker", "rden", "rger", "rst", "s",
    "siness", "sy", "tter", "yer", "zz", "bbage", "bin", "ble",
    "ctus", "ge", "ke", "ll", "lm", "mera", "mp", "n",
    "nal", "ncel", "ndy", "nnon", "noe", "nvas", "nyon", "pable",
    "pital", "ptain", "r", "rbon", "rd", "rgo", "rpet", "rry",
    "rt", "se", "sh", "sino", "stle", "sual", "t", "talog",
    "tch", "tegory", "ttle", "ught", "use", "ution", "ve", "iling",
    "lery", "ment", "nsus", "ntury", "real", "rtain", "air", "alk",
    "ampion", "ange", "aos", "apter", "arge", "ase", "at", "eap",
    "eck", "eese", "ef", "erry", "est", "icken", "ief", "ild",
    "imney", "oice", "oose", "ronic", "uckle", "unk", "urn", "gar",
    "nnamon", "rcle", "tizen", "ty", "vil", "aim", "ap", "arify",
    "aw", "ay", "ean", "erk", "ever", "ick", "ient", "iff",
    "imb", "inic", "ip", "ock", "og", "ose", "oth", "oud",
    "own", "ub", "ump", "uster", "utch", "ach", "ast", "conut",
    "de", "ffee", "il", "in", "llect", "lor", "lumn", "mbine",
    "me", "mfort", "mic", "mmon", "mpany", "ncert", "nduct", "nfirm",
    "ngress", "nnect", "nsider", "ntrol", "nvince", "ok", "ol", "pper",
    "py", "ral", "re", "rn", "rrect", "st", "tton", "uch",
    "untry", "uple", "urse", "usin", "ver", "yote", "ack", "adle",
    "aft", "am", "ane", "ash", "ater", "awl", "azy", "eam",
    "edit", "eek", "ew", "icket", "ime", "isp", "itic", "op",
    "oss", "ouch", "owd", "ucial", "uel", "uise", "umble", "unch",
    "ush", "y", "ystal", "be", "lture", "p", "pboard", "rious",
    "rrent", "rtain", "rve", "shion", "stom", "te", "cle", "d",
    "mage", "mp", "nce", "nger", "ring", "sh", "ughter", "wn",
    "y", "al", "bate", "bris", "cade", "cember", "cide", "cline",
    "corate", "crease", "er", "fense", "fine", "fy", "gree", "lay",
    "liver", "mand", "mise", "nial", "ntist", "ny", "part", "pend",
    "posit", "pth", "puty", "rive", "scribe", "sert", "sign", "sk",
    "spair", "stroy", "tail", "tect", "velop", "vice", "vote", "agram",
    "al", "amond", "ary", "ce", "esel", "et", "ffer", "gital",
    "gnity", "lemma", "nner", "nosaur", "rect", "rt", "sagree", "scover",
    "sease", "sh", "smiss", "sorder", "splay", "stance", "vert", "vide",
    "vorce", "zzy", "ctor", "cument", "g", "ll", "lphin", "main",
    "nate", "nkey", "nor", "or", "se", "uble", "ve", "aft",
    "agon", "ama", "astic", "aw", "eam", "ess", "ift", "ill",
    "ink", "ip", "ive", "op", "um", "y", "ck", "mb",
    "ne", "ring", "st", "tch", "ty", "arf", "namic", "ger",
    "gle", "rly", "rn", "rth", "sily", "st", "sy", "ho",
    "ology", "onomy", "ge", "it", "ucate", "fort", "g", "ght",
    "ther", "bow", "der", "ectric", "egant", "ement", "ephant", "evator",
    "ite", "se", "bark", "body", "brace", "erge", "otion", "ploy",
    "power", "pty", "able", "act", "d", "dless", "dorse", "emy",
    "ergy", "force", "gage", "gine", "hance", "joy", "list", "ough",
    "rich", "roll", "sure", "ter", "tire", "try", "velope", "isode",
    "ual", "uip", "a", "ase", "ode", "osion", "ror", "upt",
    "cape", "say", "sence", "tate", "ernal", "hics", "idence", "il",
    "oke", "olve", "act", "ample", "cess", "change", "cite", "clude",
    "cuse", "ecute", "ercise", "haust", "hibit", "ile", "ist", "it",
    "otic", "pand", "pect", "pire", "plain", "pose", "press", "tend",
    "tra", "e", "ebrow", "bric", "ce", "culty", "de", "int",
    "ith", "ll", "lse", "me", "mily", "mous", "n", "ncy",
    "ntasy", "rm", "shion", "t", "tal", "ther", "tigue", "ult",
    "vorite", "ature", "bruary", "deral", "e", "ed", "el", "male",
    "nce", "stival", "tch", "ver", "w", "ber", "ction", "eld",
    "gure", "le", "lm", "lter", "nal", "nd", "ne", "nger",
    "nish", "re", "rm", "rst", "scal", "sh", "t", "tness",
    "x", "ag", "ame", "ash", "at", "avor", "ee", "ight",
    "ip", "oat", "ock", "oor", "ower", "uid", "ush", "y",
    "am", "cus", "g", "il", "ld", "llow", "od", "ot",
    "rce", "rest", "rget", "rk", "rtune", "rum", "rward", "ssil",
    "ster", "und", "x", "agile", "ame", "equent", "esh", "iend",
    "inge", "og", "ont", "ost", "own", "ozen", "uit", "el",
    "n", "nny", "rnace", "ry", "ture", "dget", "in", "laxy",
    "llery", "me", "p", "rage", "rbage", "rden", "rlic", "rment",
    "s", "sp", "te", "ther", "uge", "ze", "neral", "nius",
    "nre", "ntle", "nuine", "sture", "ost", "ant", "ft", "ggle",
    "nger", "raffe", "rl", "ve", "ad", "ance", "are", "ass",
    "ide", "impse", "obe", "oom", "ory", "ove", "ow", "ue",
    "at", "ddess", "ld", "od", "ose", "rilla", "spel", "ssip",
    "vern", "wn", "ab", "ace", "ain", "ant", "ape", "ass",
    "avity", "eat", "een", "id", "ief", "it", "ocery", "oup",
    "ow", "unt", "ard", "ess", "ide", "ilt", "itar", "n",
    "m", "bit", "ir", "lf", "mmer", "mster", "nd", "ppy",
    "rbor", "rd", "rsh", "rvest", "t", "ve", "wk", "zard",
    "ad", "alth", "art", "avy", "dgehog", "ight", "llo", "lmet",
    "lp", "n", "ro", "dden", "gh", "ll", "nt", "p",
    "re", "story", "bby", "ckey", "ld", "le", "liday", "llow",
    "me", "ney", "od", "pe", "rn", "rror", "rse", "spital",
    "st", "tel", "ur", "ver", "b", "ge", "man", "mble",
    "mor", "ndred", "ngry", "nt", "rdle", "rry", "rt", "sband",
    "brid", "e", "on", "ea", "entify", "le", "nore", "l",
    "legal", "lness", "age", "itate", "mense", "mune", "pact", "pose",
    "prove", "pulse", "ch", "clude", "come", "crease", "dex", "dicate",
    "door", "dustry", "fant", "flict", "form", "hale", "herit", "itial",
    "ject", "jury", "mate", "ner", "nocent", "put", "quiry", "sane",
    "sect", "side", "spire", "stall", "tact", "terest", "to", "vest",
    "vite", "volve", "on", "land", "olate", "sue", "em", "ory",
    "cket", "guar", "r", "zz", "alous", "ans", "lly", "wel",
    "b", "in", "ke", "urney", "y", "dge", "ice", "mp",
    "ngle", "nior", "nk", "st", "ngaroo", "en", "ep", "tchup",
    "y", "ck", "d", "dney", "nd", "ngdom", "ss", "t",
    "tchen", "te", "tten", "wi", "ee", "ife", "ock", "ow",
    "b", "bel", "bor", "dder", "dy", "ke", "mp", "nguage",
    "ptop", "rge", "ter", "tin", "ugh", "undry", "va", "w",
    "wn", "wsuit", "yer", "zy", "ader", "af", "arn", "ave",
    "cture", "ft", "g", "gal", "gend", "isure", "mon", "nd",
    "ngth", "ns", "opard", "sson", "tter", "vel", "ar", "berty",
    "brary", "cense", "fe", "ft", "ght", "ke", "mb", "mit",
    "nk", "on", "quid", "st", "ttle", "ve", "zard", "ad",
    "an", "bster", "cal", "ck", "gic", "nely", "ng", "op",
    "ttery", "ud", "unge", "ve", "yal", "cky", "ggage", "mber",
    "nar", "nch", "xury", "rics", "chine", "d", "gic", "gnet",
    "id", "il", "in", "jor", "ke", "mmal", "n", "nage",
    "ndate", "ngo", "nsion", "nual", "ple", "rble", "rch", "rgin",
    "rine", "rket", "rriage", "sk", "ss", "ster", "tch", "terial",
    "th", "trix", "tter", "ximum", "ze", "adow", "an", "asure",
    "at", "chanic", "dal", "dia", "lody", "lt", "mber", "mory",
    "ntion", "nu", "rcy", "rge", "rit", "rry", "sh", "ssage",
    "tal", "thod", "ddle", "dnight", "lk", "llion", "mic", "nd",
    "nimum", "nor", "nute", "racle", "rror", "sery", "ss", "stake",
    "x", "xed", "xture", "bile", "del", "dify", "m", "ment",
    "nitor", "nkey", "nster", "nth", "on", "ral", "re", "rning",
    "squito", "ther", "tion", "tor", "untain", "use", "ve", "vie",
    "ch", "ffin", "le", "ltiply", "scle", "seum", "shroom", "sic",
    "st", "tual", "self", "stery", "th", "ive", "me", "pkin",
    "rrow", "sty", "tion", "ture", "ar", "ck", "ed", "gative",
    "glect", "ither", "phew", "rve", "st", "t", "twork", "utral",
    "ver", "ws", "xt", "ce", "ght", "ble", "ise", "minee",
    "odle", "rmal", "rth", "se", "table", "te", "thing", "tice",
    "vel", "w", "clear", "mber", "rse", "t", "k", "ey",
    "ject", "lige", "scure", "serve", "tain", "vious", "cur", "ean",
    "tober", "or", "f", "fer", "fice", "ten", "l", "ay",
    "d", "ive", "ympic", "it", "ce", "e", "ion", "line",
    "ly", "en", "era", "inion", "pose", "tion", "ange", "bit",
    "chard", "der", "dinary", "gan", "ient", "iginal", "phan", "trich",
    "her", "tdoor", "ter", "tput", "tside", "al", "en", "er",
    "n", "ner", "ygen", "ster", "one", "ct", "ddle", "ge",
    "ir", "lace", "lm", "nda", "nel", "nic", "nther", "per",
    "rade", "rent", "rk", "rrot", "rty", "ss", "tch", "th",
    "tient", "trol", "ttern", "use", "ve", "yment", "ace", "anut",
    "ar", "asant", "lican", "n", "nalty", "ncil", "ople", "pper",
    "rfect", "rmit", "rson", "t", "one", "oto", "rase", "ysical",
    "ano", "cnic", "cture", "ece", "g", "geon", "ll", "lot",
    "nk", "oneer", "pe", "stol", "tch", "zza", "ace", "anet",
    "astic", "ate", "ay", "ease", "edge", "uck", "ug", "unge",
    "em", "et", "int", "lar", "le", "lice", "nd", "ny",
    "ol", "pular", "rtion", "sition", "ssible", "st", "tato", "ttery",
    "verty", "wder", "wer", "actice", "aise", "edict", "efer", "epare",
    "esent", "etty", "event", "ice", "ide", "imary", "int", "iority",
    "ison", "ivate", "ize", "oblem", "ocess", "oduce", "ofit", "ogram",
    "oject", "omote", "oof", "operty", "osper", "otect", "oud", "ovide",
    "blic", "dding", "ll", "lp", "lse", "mpkin", "nch", "pil",
    "ppy", "rchase", "rity", "rpose", "rse", "sh", "t", "zzle",
    "ramid", "ality", "antum", "arter", "estion", "ick", "it", "iz",
    "ote", "bbit", "ccoon", "ce", "ck", "dar", "dio", "il",
    "in", "ise", "lly", "mp", "nch", "ndom", "nge", "pid",
    "re", "te", "ther", "ven", "w", "zor", "ady", "al",
    "ason", "bel", "build", "call", "ceive", "cipe", "cord", "cycle",
    "duce", "flect", "form", "fuse", "gion", "gret", "gular", "ject",
    "lax", "lease", "lief", "ly", "main", "member", "mind", "move",
    "nder", "new", "nt", "open", "pair", "peat", "place", "port",
    "quire", "scue", "semble", "sist", "source", "sponse", "sult", "tire",
    "treat", "turn", "union", "veal", "view", "ward", "ythm", "b",
    "bbon", "ce", "ch", "de", "dge", "fle", "ght", "gid",
    "ng", "ot", "pple", "sk", "tual", "val", "ver", "ad",
    "ast", "bot", "bust", "cket", "mance", "of", "okie", "om",
    "se", "tate", "ugh", "und", "ute", "yal", "bber", "de",
    "g", "le", "n", "nway", "ral", "d", "ddle", "dness",
    "fe", "il", "lad", "lmon", "lon", "lt", "lute", "me",
    "mple", "nd", "tisfy", "toshi", "uce", "usage", "ve", "y",
    "ale", "an", "are", "atter", "ene", "heme", "hool", "ience",
    "issors", "orpion", "out", "rap", "reen", "ript", "rub", "a",
    "arch", "ason", "at", "cond", "cret", "ction", "curity", "ed",
    "ek", "gment", "lect", "ll", "minar", "nior", "nse", "ntence",
    "ries", "rvice", "ssion", "ttle", "tup", "ven", "adow", "aft",
    "allow", "are", "ed", "ell", "eriff", "ield", "ift", "ine",
    "ip", "iver", "ock", "oe", "oot", "op", "ort", "oulder",
    "ove", "rimp", "rug", "uffle", "y", "bling", "ck", "de",
    "ege", "ght", "gn", "lent", "lk", "lly", "lver", "milar",
    "mple", "nce", "ng", "ren", "ster", "tuate", "x", "ze",
    "ate", "etch", "i", "ill", "in", "irt", "ull", "ab",
    "am", "eep", "ender", "ice", "ide", "ight", "im", "ogan",
    "ot", "ow", "ush", "all", "art", "ile", "oke", "ooth",
    "ack", "ake", "ap", "iff", "ow", "ap", "ccer", "cial",
    "ck", "da", "ft", "lar", "ldier", "lid", "lution", "lve",
    "meone", "ng", "on", "rry", "rt", "ul", "und", "up",
    "urce", "uth", "ace", "are", "atial", "awn", "eak", "ecial",
    "eed", "ell", "end", "here", "ice", "ider", "ike", "in",
    "irit", "lit", "oil", "onsor", "oon", "ort", "ot", "ray",
    "read", "ring", "y", "uare", "ueeze", "uirrel", "able", "adium",
    "aff", "age", "airs", "amp", "and", "art", "ate", "ay",
    "eak", "eel", "em", "ep", "ereo", "ick", "ill", "ing",
    "ock", "omach", "one", "ool", "ory", "ove", "rategy", "reet",
    "rike", "rong", "ruggle", "udent", "uff", "umble", "yle", "bject",
    "bmit", "bway", "ccess", "ch", "dden", "ffer", "gar", "ggest",
    "it", "mmer", "n", "nny", "nset", "per", "pply", "preme",
    "re", "rface", "rge", "rprise", "rround", "rvey", "spect", "stain",
    "allow", "amp", "ap", "arm", "ear", "eet", "ift", "im",
    "ing", "itch", "ord", "mbol", "mptom", "rup", "stem", "ble",
    "ckle", "g", "il", "lent", "lk", "nk", "pe", "rget",
    "sk", "ste", "ttoo", "xi", "ach", "am", "ll", "n",
    "nant", "nnis", "nt", "rm", "st", "xt", "ank", "at",
    "eme", "en", "eory", "ere", "ey", "ing", "is", "ought",
    "ree", "rive", "row", "umb", "under", "cket", "de", "ger",
    "lt", "mber", "me", "ny", "p", "red", "ssue", "tle",
    "ast", "bacco", "day", "ddler", "e", "gether", "ilet", "ken",
    "mato", "morrow", "ne", "ngue", "night", "ol", "oth", "p",
    "pic", "pple", "rch", "rnado", "rtoise", "ss", "tal", "urist",
    "ward", "wer", "wn", "y", "ack", "ade", "affic", "agic",
    "ain", "ansfer", "ap", "ash", "avel", "ay", "eat", "ee",
    "end", "ial", "ibe", "ick", "igger", "im", "ip", "ophy",
    "ouble", "uck", "ue", "uly", "umpet", "ust", "uth", "y",
    "be", "ition", "mble", "na", "nnel", "rkey", "rn", "rtle",
    "elve", "enty", "ice", "in", "ist", "o", "pe", "pical",
    "ly", "brella", "able", "aware", "cle", "cover", "der", "do",
    "fair", "fold", "happy", "iform", "ique", "it", "iverse", "known",
    "lock", "til", "usual", "veil", "date", "grade", "hold", "on",
    "per", "set", "ban", "ge", "age", "e", "ed", "eful",
    "eless", "ual", "ility", "cant", "cuum", "gue", "lid", "lley",
    "lve", "n", "nish", "por", "rious", "st", "ult", "hicle",
    "lvet", "ndor", "nture", "nue", "rb", "rify", "rsion", "ry",
    "ssel", "teran", "able", "brant", "cious", "ctory", "deo", "ew",
    "llage", "ntage", "olin", "rtual", "rus", "sa", "sit", "sual",
    "tal", "vid", "cal", "ice", "id", "lcano", "lume", "te",
    "yage", "ge", "gon", "it", "lk", "ll", "lnut", "nt",
    "rfare", "rm", "rrior", "sh", "sp", "ste", "ter", "ve",
    "y", "alth", "apon", "ar", "asel", "ather", "b", "dding",
    "ekend", "ird", "lcome", "st", "t", "ale", "at", "eat",
    "eel", "en", "ere", "ip", "isper", "de", "dth", "fe",
    "ld", "ll", "n", "ndow", "ne", "ng", "nk", "nner",
    "nter", "re", "sdom", "se", "sh", "tness", "lf", "man",
    "nder", "od", "ol", "rd", "rk", "rld", "rry", "rth",
    "ap", "eck", "estle", "ist", "ite", "ong", "rd", "ar",
    "llow", "u", "ung", "uth", "bra", "ro", "ne", "o",
];
