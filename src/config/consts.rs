// src/config/consts.rs

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "TGSTAT_LOG";

/* ---------------- Channel export ---------------- */

// Page markup
pub const CARD_SELECTOR: &str = ".card.peer-item-row, .channel-item";
pub const LINK_SELECTOR: &str = r#"a[href*="tgstat.ru/channel"]"#;
pub const NAME_SELECTORS: &[&str] = &[".font-16", "h6", ".text-truncate", "strong"];
pub const STAT_SELECTOR: &str = "h4";

// Link normalization
pub const TG_BASE: &str = "https://t.me/";
pub const TG_JOINCHAT: &str = "https://t.me/joinchat/";

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE: &str = "tgstat_channels.csv";
pub const CSV_SEP: char = ',';
pub const CSV_COMMENT: char = '#';
pub const CSV_PREAMBLE: &[&str] = &[
    "# Больше пользы здесь: https://t.me/vkobilinskaya",
    "# ",
];
pub const CSV_HEADERS: &[&str] = &["URL", "Название", "Подписчики", "Охват", "Индекс цитирования"];

// Dialogs
pub const FOLLOW_UP_URL: &str = "https://t.me/vkobilinskaya";
pub const MSG_NO_CHANNELS: &str = "Каналы не найдены!";
pub const MSG_EXPORTED: &str = "CSV выгружен успешно!\n\nХотите открыть канал https://t.me/vkobilinskaya с полезными материалами по маркетингу?";
pub const MSG_ERROR_PREFIX: &str = "Ошибка: ";
pub const MSG_ERROR_HINT: &str = "\nПерепроверьте страницу или откройте другой список каналов.";

/* ---------------- Timer ---------------- */

pub const DEFAULT_MINUTES: u32 = 25;
pub const CUSTOM_MIN_MINUTES: u32 = 1;
pub const CUSTOM_MAX_MINUTES: u32 = 180;
pub const PRESET_MINUTES: &[u32] = &[25, 15, 5];
pub const TICK_MS: u64 = 1_000;
pub const PULSE_MS: u64 = 300;

pub const APP_NAME: &str = "TGStat Tools";
pub const APP_TITLE: &str = "Pomodoro Timer";
pub const TITLE_SUFFIX: &str = " - Pomodoro Timer";

pub const STATUS_READY: &str = "Готов к работе";
pub const STATUS_RUNNING: &str = "Таймер запущен...";
pub const STATUS_PAUSED: &str = "Таймер на паузе";
pub const STATUS_DONE: &str = "Время вышло! 🎉";
pub const TITLE_DONE: &str = "Время вышло!";
pub const MSG_BAD_MINUTES: &str = "Пожалуйста, введите время от 1 до 180 минут";

pub const NOTICE_TITLE: &str = "Pomodoro Timer";
pub const NOTICE_BODY: &str = "Время вышло! Пора сделать перерыв.";

// Completion tone
pub const BEEP_HZ: f32 = 800.0;
pub const BEEP_SECS: f32 = 0.5;
pub const BEEP_GAIN_START: f32 = 0.3;
pub const BEEP_GAIN_END: f32 = 0.01;
pub const BEEP_SAMPLE_RATE: u32 = 44_100;
