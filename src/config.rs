pub const OUTPUT_FILE: &str = "pinyin_tone.dict.yaml";

pub const DICT_NAME: &str = "pinyin_tone";
pub const DICT_VERSION: &str = "1.0";
pub const DICT_SORT: &str = "by_weight";
