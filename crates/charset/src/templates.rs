//! Reference letter sets used for template checks and contextual forms.

pub const UPPER_TEMPLATE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_TEMPLATE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Arabic alphabet in abjad order.
pub const AR_TEMPLATE: &str = "ابجدهوزحطيكلمنسعفصقرشتثخذضظغء";

/// Persian alphabet.
pub const FA_TEMPLATE: &str = "یهونملگکقفغعظطضصشسژزرذدخحچجثتپباء";

/// Arabic-script letters that join on both sides.
pub const ARFA_DUAL_JOIN: &str = "بتثپنقفڤسشصضطظكلهةمعغحخجچيئىکگی";

/// Arabic-script letters that join only to the preceding letter.
pub const ARFA_RIGHT_JOIN: &str = "اأإآٱرزدذوؤژ";

/// Letters a font must carry before Arabic text samples are attempted.
pub const ARABIC_CORE_LETTERS: &str = "باحدر";

pub const HAMZA: char = 'ء';
pub const BEH: char = 'ب';
