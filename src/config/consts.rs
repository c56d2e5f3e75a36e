// src/config/consts.rs

// Net config
pub const TIMETABLE_URL: &str = "https://cabinet.sut.ru/raspisanie_all_new";
pub const USER_AGENT: &str = concat!("timetable_grid/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Timetable form
pub const FORM_TYPE_Z: u32 = 4;
pub const FORM_FACULTY: u32 = 56580;
pub const FORM_COURSE: u32 = 0;
pub const FORM_GROUP: u32 = 53262;
pub const FORM_GROUP_EL: u32 = 0;
pub const FORM_SUBMIT: &str = "Показать";

// Markup
pub const TABLE_CLASS: &str = "simple-little-table";
pub const ROW_CLASS: &str = "pair";
pub const DATE_LEN: usize = 10;

// Grid
pub const CELLS_PER_WEEK_BLOCK: u32 = 26;
pub const CELLS_PER_SESSION_BLOCK: u32 = 5;
pub const MAX_PAIRS_PER_DAY: u8 = 5;
pub const FIRST_COLUMN: u16 = 1;
pub const WEEKDAY_COLUMNS: u16 = 6;

// Sheet styling
pub const COLOR_WEEKDAY: u32 = 0xFF6666;
pub const COLOR_PAIR_HEADER: u32 = 0xFFDD99;
pub const FONT_NAME: &str = "Times New Roman";
pub const FONT_SIZE: u16 = 14;
pub const SHEET_NAME: &str = "Schedule";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_PAGE_FILE: &str = "timetable.html";
pub const LOG_FILE: &str = ".store/debug.log";

// Config
pub const CONFIG_FILE: &str = "timetable.cfg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "schedule.xlsx";
