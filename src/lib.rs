pub mod config;
pub mod dict_gen;
pub mod pinyin;
pub mod syllables;
