//! Curated text used by paragraph proofs and the word generator.

/// Mixed-case passage for large paragraph proofs.
pub const BIG_MIXED_TEXT: &str = "Quietly, the harbour lights came on one by one while the ferry from \
Jutland pulled in half an hour late. Maxine waited by the kiosk with a paper cup of cocoa, \
watching gulls argue over the remains of a sandwich. Nobody on the quay seemed to be in a hurry; \
a boy juggled three oranges, a vendor folded his awnings, and somewhere above the fish market \
a brass band was rehearsing the same eight bars of a waltz.";

pub const BIG_LOWER_TEXT: &str = "quietly, the harbour lights came on one by one while the ferry \
pulled in half an hour late. a woman waited by the kiosk with a paper cup of cocoa, watching \
gulls argue over the remains of a sandwich. nobody on the quay seemed to be in a hurry; a boy \
juggled three oranges, a vendor folded his awnings, and somewhere above the fish market a brass \
band was rehearsing the same eight bars of a waltz.";

pub const BIG_UPPER_TEXT: &str = "QUIETLY, THE HARBOUR LIGHTS CAME ON ONE BY ONE WHILE THE FERRY \
FROM JUTLAND PULLED IN HALF AN HOUR LATE. MAXINE WAITED BY THE KIOSK WITH A PAPER CUP OF COCOA, \
WATCHING GULLS ARGUE OVER THE REMAINS OF A SANDWICH. NOBODY ON THE QUAY SEEMED TO BE IN A HURRY.";

/// Mixed-case passage for small paragraph proofs.
pub const SMALL_MIXED_TEXT: &str = "The workshop at the end of Kestrel Lane had been a bakery, a \
bicycle repair shop and, for one improbable summer, a museum of mechanical toys. Its current \
tenant, a typefounder named Iwona Zeller, kept the old ovens as storage for lead type and \
printed her specimens on a press she had rebuilt from parts bought at auction in Quebec. Visitors \
were welcome on Thursdays. She would hand them a composing stick, point at a case of twelve-point \
Garamond and ask them to set their own name, backwards and upside down, before explaining why \
the lowercase g was always the last letter anyone got right. Jars of ink lined the window sill: \
ochre, oxblood, a violet that looked almost black under the lamp. On the wall hung a framed \
alphabet cut by her grandfather in 1934, the J slightly too wide, the Q with a tail that swept \
under the next two letters. Proofs went into flat drawers labelled by weight and year, and every \
Friday she compared the new pulls with the old ones, looking for the quiet drift that creeps \
into any design when nobody is checking.";

pub const SMALL_LOWER_TEXT: &str = "the workshop at the end of the lane had been a bakery, a bicycle \
repair shop and, for one improbable summer, a museum of mechanical toys. its current tenant kept \
the old ovens as storage for lead type and printed her specimens on a press rebuilt from parts \
bought at auction. visitors were welcome on thursdays. she would hand them a composing stick, \
point at a case of twelve-point type and ask them to set their own name, backwards and upside \
down, before explaining why the lowercase g was always the last letter anyone got right. jars of \
ink lined the window sill: ochre, oxblood, a violet that looked almost black under the lamp. \
proofs went into flat drawers labelled by weight and year, and every friday she compared the new \
pulls with the old ones, looking for the quiet drift that creeps into any design when nobody is \
checking.";

pub const SMALL_UPPER_TEXT: &str = "THE WORKSHOP AT THE END OF KESTREL LANE HAD BEEN A BAKERY, A \
BICYCLE REPAIR SHOP AND, FOR ONE IMPROBABLE SUMMER, A MUSEUM OF MECHANICAL TOYS. ITS CURRENT \
TENANT KEPT THE OLD OVENS AS STORAGE FOR LEAD TYPE AND PRINTED HER SPECIMENS ON A PRESS REBUILT \
FROM PARTS BOUGHT AT AUCTION IN QUEBEC. VISITORS WERE WELCOME ON THURSDAYS. JARS OF INK LINED THE \
WINDOW SILL: OCHRE, OXBLOOD, A VIOLET THAT LOOKED ALMOST BLACK UNDER THE LAMP. PROOFS WENT INTO \
FLAT DRAWERS LABELLED BY WEIGHT AND YEAR.";

pub const BIG_RANDOM_NUMBERS: &str = "A0 B1 C2 D3 E4 F5 G6 H7 I8 J9 0123456789 \
1/2 3/4 5/8 0.25 12.5% 99.9% 1,024 65,536 3.14159 2.71828 \
$12.40 €7,50 £3.99 ¥1200 #42 No. 17 +31 (0)20 555 0199 \
1918–2018 08:45–17:30 24°C −3°F 7×8=56 144÷12=12 1+1≠3 \
H1 H2 n0 o1 10 11 12 13 14 15 16 17 18 19 20 100 1000 2048 4096 \
37 41 43 47 53 59 61 67 71 73 79 83 89 97 101 103 107 109 113";

pub const ADDITIONAL_SMALL_TEXT: &str = "Quick checks: hamburgefonstiv, HAMBURGEFONSTIV, \
Hamburgefonstiv. Nonagon, minimum, ooze, vivid, waxwork, jujitsu. (Parentheses) [brackets] \
{braces} \u{201c}quotes\u{201d} \u{2018}single\u{2019} \u{ab}guillemets\u{bb} \
e-mail@example.org / path\\to\\file | a_b_c ~ ^ * & @ ... ellipsis\u{2026} em\u{2014}dash \
en\u{2013}dash \u{2022} bullet \u{a7}12 \u{b6}4 \u{a9}2024 \u{ae} \u{2122} fi fl ff ffi ffl \
ct st Th Wa Yo Te To AV LT P. F. r, y. \"straight\" 'quotes' !? \u{a1}\u{bf}";

/// English vocabulary for generated text.
pub const ENGLISH_WORDS: &[&str] = &[
    "a", "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me", "my", "no",
    "of", "on", "or", "so", "to", "up", "us", "we", "and", "are", "bag", "but", "can", "cup",
    "day", "dog", "ear", "egg", "far", "few", "fix", "fog", "for", "fox", "get", "had", "has",
    "hat", "her", "him", "his", "hot", "how", "ice", "ink", "jam", "jar", "job", "joy", "key",
    "kid", "lap", "law", "lay", "map", "mix", "new", "not", "now", "oak", "odd", "old", "one",
    "our", "out", "own", "pen", "pot", "put", "quo", "ran", "raw", "red", "row", "run", "saw",
    "say", "sea", "see", "she", "sky", "sun", "tax", "tea", "the", "too", "two", "use", "van",
    "via", "wax", "way", "web", "who", "why", "yes", "yet", "you", "zip", "zoo", "able", "also",
    "back", "bold", "book", "both", "came", "city", "cold", "copy", "dark", "data", "deep",
    "down", "draw", "each", "even", "face", "fact", "file", "fine", "font", "form", "from",
    "full", "give", "glow", "good", "gray", "grid", "half", "hand", "have", "here", "high",
    "hold", "idea", "into", "jazz", "just", "keep", "kind", "know", "lamp", "last", "lead",
    "left", "line", "long", "look", "make", "many", "mark", "more", "most", "much", "must",
    "name", "near", "next", "note", "only", "open", "over", "page", "pair", "part", "play",
    "quay", "quiz", "read", "rest", "right", "room", "same", "seem", "show", "side", "size",
    "some", "such", "take", "text", "than", "that", "them", "then", "they", "this", "time",
    "town", "type", "very", "view", "wait", "walk", "want", "well", "what", "when", "wide",
    "will", "with", "word", "work", "year", "your", "zero", "zone", "about", "above", "after",
    "again", "alpha", "angle", "apple", "bakery", "basket", "beyond", "bicycle", "bright",
    "broken", "bronze", "candle", "carbon", "castle", "circle", "climate", "clockwork",
    "column", "compass", "copper", "crystal", "dazzle", "desert", "double", "dozens", "driven",
    "eleven", "empire", "engine", "enough", "evening", "exact", "exhibit", "explain", "factory",
    "fabric", "falcon", "feather", "figure", "finger", "flight", "flicker", "forest", "fountain",
    "freeze", "friend", "frozen", "galaxy", "garden", "gentle", "glimpse", "golden", "gravity",
    "guitar", "hammer", "harbour", "harvest", "hazard", "hollow", "horizon", "hybrid", "island",
    "ivory", "jacket", "jigsaw", "jockey", "journey", "juggle", "jungle", "justice", "kernel",
    "kettle", "keyboard", "kingdom", "kitchen", "knowledge", "ladder", "lantern", "legend",
    "letter", "liquid", "lizard", "lobster", "machine", "magnet", "marble", "market", "meadow",
    "method", "mirror", "modest", "morning", "museum", "mystery", "narrow", "needle", "network",
    "nimble", "number", "object", "oblique", "ocean", "office", "orange", "orchard", "origin",
    "oxygen", "oyster", "paddle", "palace", "paper", "parallel", "pepper", "pillow", "planet",
    "plenty", "pocket", "poetry", "printer", "puzzle", "pyramid", "quality", "quantum",
    "quarter", "question", "quickly", "quiet", "quilt", "quiver", "quorum", "rabbit", "random",
    "record", "rhythm", "ribbon", "river", "rocket", "saddle", "salmon", "schedule", "shadow",
    "silver", "simple", "sketch", "smooth", "spiral", "square", "stable", "string", "summer",
    "symbol", "system", "tablet", "temple", "theory", "thirty", "ticket", "timber", "travel",
    "tundra", "twelve", "typeface", "umbrella", "unique", "united", "upward", "useful",
    "valley", "velvet", "vessel", "victory", "village", "violet", "visible", "vivid", "voyage",
    "walnut", "wander", "weather", "whisper", "window", "winter", "wizard", "wonder", "wooden",
    "yellow", "yesterday", "yogurt", "zealous", "zenith", "zephyr", "zigzag", "zipper",
    "absolute", "baseline", "blizzard", "boulevard", "chemistry", "conjunction", "crossword",
    "exquisite", "fixture", "glyphs", "hexagon", "jukebox", "kayaking", "kilometer",
    "maximum", "mixture", "nightjar", "objective", "overview", "pixelated", "quadrant",
    "quixotic", "sixteen", "skyline", "squeeze", "vortex", "waxwork", "whiskey", "xylophone",
    "yachting", "zucchini", "backbone", "highway", "jellyfish", "lockjaw", "overjoyed",
];

/// Sample words per lowercase accented (or otherwise extended) letter.
pub const ACCENTED_WORDS: &[(char, &[&str])] = &[
    ('à', &["voilà", "déjà", "città", "università", "perché", "là", "già", "verità"]),
    ('á', &["árbol", "está", "mamá", "ágil", "también", "válido", "fácil", "sábado"]),
    ('â', &["château", "âme", "pâte", "gâteau", "âge", "bâton", "théâtre", "câble"]),
    ('ã', &["não", "mãe", "pão", "irmã", "canção", "manhã", "coração", "alemã"]),
    ('ä', &["männer", "bär", "käse", "spät", "träumen", "ärger", "mädchen", "täglich"]),
    ('å', &["åtta", "båt", "får", "gå", "sån", "året", "små", "också"]),
    ('æ', &["æble", "træ", "læse", "sæson", "bær", "hæl", "kæmpe", "æter"]),
    ('ç', &["garçon", "façade", "français", "leçon", "ação", "çok", "reçu", "maçon"]),
    ('è', &["très", "père", "mère", "crème", "problème", "fièvre", "règle", "lumière"]),
    ('é', &["café", "été", "idée", "école", "théâtre", "résumé", "vérité", "fée"]),
    ('ê', &["être", "fête", "forêt", "tête", "rêve", "fenêtre", "même", "bête"]),
    ('ë', &["noël", "citroën", "israël", "poëte", "canoë", "zoë", "ruïne", "reünie"]),
    ('ì', &["così", "lunedì", "martedì", "venerdì", "sì", "lì", "giovedì", "mercoledì"]),
    ('í', &["país", "allí", "día", "así", "río", "frío", "increíble", "música"]),
    ('î', &["île", "dîner", "maître", "connaître", "gîte", "huître", "abîme", "naître"]),
    ('ï', &["naïve", "maïs", "égoïste", "héroïne", "laïque", "mosaïque", "ouïe", "caïman"]),
    ('ñ', &["año", "niño", "mañana", "español", "señor", "montaña", "pequeño", "sueño"]),
    ('ò', &["però", "può", "andò", "perciò", "farò", "dirò", "parlò", "cantò"]),
    ('ó', &["canción", "acción", "corazón", "árbol", "jóvenes", "ópera", "mó", "también"]),
    ('ô', &["hôtel", "côte", "hôpital", "rôle", "tôt", "bientôt", "fantôme", "trône"]),
    ('õ', &["põe", "lições", "corações", "canções", "limões", "botões", "melões", "estações"]),
    ('ö', &["schön", "höhe", "öffnen", "können", "möbel", "söhne", "körper", "böse"]),
    ('ø', &["øl", "bønne", "søster", "ørken", "dør", "først", "søndag", "sø"]),
    ('ù', &["où", "goût", "août", "voilà", "piùttosto", "più", "giù", "virtù"]),
    ('ú', &["último", "música", "público", "túnel", "útil", "según", "jesús", "perú"]),
    ('û', &["goût", "sûr", "août", "flûte", "mûr", "brûler", "croûte", "dû"]),
    ('ü', &["über", "müde", "früh", "grün", "küche", "müller", "tür", "glück"]),
    ('ý', &["dobrý", "rýže", "mýdlo", "bývalý", "týden", "výlet", "zlatý", "nový"]),
    ('ÿ', &["ÿ", "haÿ", "laÿ", "l'haÿ", "aÿ", "moÿse", "louÿs", "ÿvonne"]),
    ('ß', &["straße", "groß", "fuß", "weiß", "heißen", "schließen", "süß", "maß"]),
    ('ą', &["będą", "mają", "ząb", "wąski", "krąg", "miąższ", "pąk", "dąb"]),
    ('ć', &["ćma", "być", "mieć", "pić", "chcieć", "ćwiczyć", "żyć", "noć"]),
    ('č', &["čaj", "člověk", "čeština", "večer", "číslo", "řečník", "mačka", "čokoláda"]),
    ('ď', &["ďábel", "loď", "ďakujem", "teď", "žluťoučký", "hruď", "kaďa", "zeď"]),
    ('ę', &["język", "ręka", "mięso", "będę", "gęś", "węgiel", "pięć", "dziękuję"]),
    ('ě', &["město", "dělat", "věda", "běžet", "pěkný", "zvěř", "hvězda", "měsíc"]),
    ('ğ', &["dağ", "ağaç", "yağmur", "soğuk", "doğru", "eğitim", "ğ", "oğlan"]),
    ('ı', &["ışık", "kız", "kırmızı", "altı", "balık", "sıcak", "yıldız", "ılık"]),
    ('ł', &["łódź", "mały", "długi", "ładny", "miłość", "złoto", "głowa", "bułka"]),
    ('ń', &["koń", "dzień", "słońce", "pań", "jesień", "ogień", "kamień", "tańczyć"]),
    ('ň', &["kůň", "laň", "píseň", "daň", "báseň", "dlaň", "zbraň", "ňadra"]),
    ('ő', &["hő", "erő", "nő", "idő", "kő", "tőke", "erdő", "szőlő"]),
    ('œ', &["cœur", "sœur", "œuvre", "bœuf", "œil", "nœud", "vœu", "manœuvre"]),
    ('ř', &["řeka", "tři", "moře", "řád", "dveře", "hořet", "příroda", "kouř"]),
    ('ś', &["śnieg", "świat", "ślub", "środa", "śliwka", "jesień", "ściana", "gęś"]),
    ('š', &["škola", "šest", "našel", "šťastný", "šaty", "píšu", "puška", "kaša"]),
    ('ş', &["şehir", "güneş", "şeker", "başka", "taş", "kış", "beş", "şarkı"]),
    ('ţ', &["ţară", "ţine", "soţie", "fiinţă", "ţiglă", "forţă", "ţânţar", "speranţă"]),
    ('ť', &["ťava", "chuť", "čepeľ", "nechť", "zeť", "pamäť", "teť", "ťukať"]),
    ('ů', &["dům", "kůň", "stůl", "vůz", "půl", "můj", "růže", "průvod"]),
    ('ű', &["tű", "fű", "betű", "szűk", "gyűrű", "könnyű", "hű", "űr"]),
    ('ź', &["źródło", "późno", "źle", "jeździć", "woźny", "grzebień", "mroźny", "źrebię"]),
    ('ż', &["żaba", "może", "żółty", "każdy", "róża", "żona", "wieża", "żyć"]),
    ('ž', &["žena", "život", "může", "žlutý", "nůž", "kůže", "žába", "růže"]),
];

/// Arabic vocabulary.
pub const AR_WORDS: &[&str] = &[
    "كتاب", "مدرسة", "بيت", "قلم", "شمس", "قمر", "ماء", "سماء", "بحر", "جبل", "نهر", "شجرة",
    "وردة", "طريق", "مدينة", "سيارة", "طالب", "معلم", "لغة", "عربي", "جميل", "كبير", "صغير",
    "سعيد", "يوم", "ليلة", "صباح", "مساء", "خبز", "حليب", "باب", "نافذة", "عمل", "علم", "حب",
    "سلام", "صديق", "عائلة", "ولد", "بنت", "رجل", "امرأة", "سوق", "تفاح", "برتقال", "ذهب",
    "فضة", "نور", "ظل", "غيمة", "مطر", "ثلج", "ريح", "أرض", "زهرة", "حديقة", "مكتب", "ورقة",
    "حرف", "كلمة", "جملة", "قصة", "شعر", "فكرة", "وقت", "ساعة", "دقيقة", "شهر", "سنة", "عين",
    "يد", "قلب", "رأس", "وجه", "صوت", "لون", "أبيض", "أسود", "أحمر", "أخضر", "أزرق", "منزل",
    "مطبخ", "غرفة", "سرير", "كرسي", "طاولة", "فنجان", "قهوة", "شاي", "سكر", "ملح", "لحم",
    "سمك", "دجاج", "فلفل", "ضيف", "ظهر", "غزال", "ثعلب", "خيمة", "زيت", "طبيب", "مستشفى",
    "هدية", "نجمة", "بستان", "مفتاح", "ضوء", "عصفور", "جسر", "شارع",
];

/// Persian vocabulary.
pub const FA_WORDS: &[&str] = &[
    "کتاب", "مدرسه", "خانه", "قلم", "خورشید", "ماه", "آب", "آسمان", "دریا", "کوه", "رود",
    "درخت", "گل", "راه", "شهر", "ماشین", "دانشجو", "معلم", "زبان", "فارسی", "زیبا", "بزرگ",
    "کوچک", "شاد", "روز", "شب", "صبح", "عصر", "نان", "شیر", "پنجره", "کار", "دانش", "عشق",
    "دوست", "خانواده", "پسر", "دختر", "مرد", "زن", "بازار", "سیب", "پرتقال", "طلا", "نقره",
    "نور", "سایه", "ابر", "باران", "برف", "باد", "زمین", "باغ", "میز", "صندلی", "کاغذ", "حرف",
    "کلمه", "جمله", "داستان", "شعر", "فکر", "وقت", "ساعت", "دقیقه", "سال", "چشم", "دست", "دل",
    "سر", "صورت", "صدا", "رنگ", "سفید", "سیاه", "سرخ", "سبز", "آبی", "آشپزخانه", "اتاق", "چای",
    "قهوه", "شکر", "نمک", "گوشت", "ماهی", "مرغ", "پژوهش", "ژاله", "گنجشک", "چراغ", "پدر",
    "مادر", "ضیافت", "ظرف", "غذا", "ثروت", "ذهن", "طوطی", "عینک", "پل", "خیابان",
];

/// Fully vocalised Arabic.
pub const ARABIC_VOCALIZATION: &str = "اَلْعِلْمُ نُورٌ وَالْجَهْلُ ظَلَامٌ. ذَهَبَ الْوَلَدُ \
إِلَى الْمَدْرَسَةِ فِي الصَّبَاحِ الْبَاكِرِ، وَكَتَبَ دَرْسَهُ بِقَلَمٍ جَدِيدٍ. قَرَأَتِ \
الْبِنْتُ قِصَّةً قَصِيرَةً عَنْ طَائِرٍ صَغِيرٍ يَطِيرُ فَوْقَ الْبَحْرِ. شَرِبْنَا الشَّايَ \
مَعَ الْأَصْدِقَاءِ تَحْتَ ظِلِّ شَجَرَةٍ كَبِيرَةٍ، ثُمَّ مَشَيْنَا عَلَى شَاطِئِ النَّهْرِ حَتَّى \
غَرَبَتِ الشَّمْسُ. مَنْ جَدَّ وَجَدَ، وَمَنْ زَرَعَ حَصَدَ.";

/// Arabic running text with embedded Latin words and figures.
pub const ARABIC_LATIN_MIXED: &str = "يستخدم المصمم برنامج Glyphs لرسم الحروف، ثم يصدّر الخط \
بصيغة OpenType أو TrueType. يحتوي الإصدار 2.1 على 450 حرفًا، ويدعم لغات مثل English \
وFrançais والعربية والفارسية. زار فريق التصميم معرض ATypI في مدينة Porto عام 2019، وعرض \
نموذجًا جديدًا بعنوان Nastaliq Study على شاشة بدقة 4K. للتواصل: info@example.org أو \
الموقع www.example.org/fonts.";

/// Arabic-Indic and Extended Arabic-Indic numerals in context.
pub const ARABIC_FARSI_URDU_NUMBERS: &str = "٠ ١ ٢ ٣ ٤ ٥ ٦ ٧ ٨ ٩ \
۰ ۱ ۲ ۳ ۴ ۵ ۶ ۷ ۸ ۹ \
٠١٢٣٤٥٦٧٨٩ ۰۱۲۳۴۵۶۷۸۹ \
عدد الطلاب ١٢٤ طالبًا في ٣ صفوف. السعر ٤٥٫٥٠ دينار، والخصم ١٥٪. \
تاریخ ۱۴۰۲/۰۸/۲۳ ساعت ۱۰:۳۰، جمعیت ۸۵٬۰۰۰٬۰۰۰ نفر. \
۲۵ سال، ۷ دن، ۴۸ گھنٹے، صفحہ ۱۸۹ \
1 ١ ۱ — 10 ١٠ ۱۰ — 2024 ٢٠٢٤ ۲۰۲۴";

pub fn accented_words(letter: char) -> &'static [&'static str] {
    ACCENTED_WORDS.iter().find(|(c, _)| *c == letter).map(|(_, words)| *words).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_words_contain_their_letter() {
        for (letter, words) in ACCENTED_WORDS {
            assert!(words.iter().any(|w| w.contains(*letter)), "{letter}");
        }
    }

    #[test]
    fn vocabulary_is_lowercase() {
        assert!(ENGLISH_WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn unknown_letter_has_no_words() {
        assert!(accented_words('q').is_empty());
        assert!(!accented_words('é').is_empty());
    }
}
