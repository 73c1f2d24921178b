//! Translated report labels keyed by language code
//!
//! The table is built once on first use and only read afterwards. Lookups
//! never fail: an unknown language code falls back to the English labels.

use chrono::Weekday;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Language every lookup falls back to
pub const FALLBACK_LANGUAGE: &str = "en";

/// Shown for a weekday when not even the fallback language has a name for it
const UNLOCALIZED_WEEKDAY: &str = "-";

/// Labels for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageLabels {
    pub sunrise: &'static str,
    pub sunset: &'static str,
    /// Weekday names starting with Sunday, `None` when not translated
    pub weekdays: Option<[&'static str; 7]>,
}

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const CHINESE_WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

const fn labels(
    sunrise: &'static str,
    sunset: &'static str,
    weekdays: Option<[&'static str; 7]>,
) -> LanguageLabels {
    LanguageLabels {
        sunrise,
        sunset,
        weekdays,
    }
}

#[rustfmt::skip]
const TABLE: &[(&str, LanguageLabels)] = &[
    ("en", labels("Sunrise", "Sunset", Some(ENGLISH_WEEKDAYS))),
    ("ar", labels("شروق الشمس", "غروب", Some(["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"]))),
    ("bn", labels("সূর্যোদয়", "সূর্যাস্ত", None)),
    ("bg", labels("Изгрев", "Залез", Some(["Неделя", "Понеделник", "Вторник", "Сряда", "Четвъртък", "Петък", "Събота"]))),
    ("zh", labels("日出", "日落", Some(CHINESE_WEEKDAYS))),
    ("zh_tw", labels("日出", "日落", Some(CHINESE_WEEKDAYS))),
    ("zh_cmn", labels("日出", "日落", Some(CHINESE_WEEKDAYS))),
    ("zh_wuu", labels("日出", "晚霞", Some(CHINESE_WEEKDAYS))),
    ("zh_hsn", labels("日出", "夕阳", Some(CHINESE_WEEKDAYS))),
    ("zh_yue", labels("日出", "日落", Some(CHINESE_WEEKDAYS))),
    ("cs", labels("Východ slunce", "Západ slunce", Some(["Neděle", "Pondělí", "Úterý", "Středa", "Čtvrtek", "Pátek", "Sobota"]))),
    ("da", labels("Solopgang", "Solnedgang", Some(["Søndag", "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag"]))),
    ("nl", labels("Zonsopgang", "Zonsondergang", Some(["Zondag", "Maandag", "Dinsdag", "Woensdag", "Donderdag", "Vrijdag", "Zaterdag"]))),
    ("fi", labels("Auringonnousu", "Auringonlasku", Some(["Sunnuntai", "Maanantai", "Tiistai", "Keskiviikko", "Torstai", "Perjantai", "Lauantai"]))),
    ("fr", labels("Lever du soleil", "Coucher de soleil", Some(["Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi"]))),
    ("de", labels("Sonnenaufgang", "Sonnenuntergang", Some(["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"]))),
    ("el", labels("Ανατολή ηλίου", "Ηλιοβασίλεμα", Some(["Κυριακή", "Δευτέρα", "Τρίτη", "Τετάρτη", "Πέμπτη", "Παρασκευή", "Σάββατο"]))),
    ("hi", labels("सूर्योदय", "सूर्यास्त", Some(["रविवार", "सोमवार", "मंगलवार", "बुधवार", "गुरुवार", "शुक्रवार", "शनिवार"]))),
    ("hu", labels("Napkelte", "Napnyugta", Some(["Vasárnap", "Hétfő", "Kedd", "Szerda", "Csütörtök", "Péntek", "Szombat"]))),
    ("it", labels("Alba", "Tramonto", Some(["Domenica", "Lunedì", "Martedì", "Mercoledì", "Giovedì", "Venerdì", "Sabato"]))),
    ("ja", labels("日の出", "日没", Some(["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"]))),
    ("jv", labels("Srengenge munggah", "Sunset", None)),
    ("ko", labels("일출", "일몰", Some(["일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일"]))),
    ("mr", labels("सूर्योदय", "सूर्यास्त", Some(["रविवार", "सोमवार", "मंगळवार", "बुधवार", "गुरुवार", "शुक्रवार", "शनिवार"]))),
    ("pl", labels("Wschód słońca", "Zachód słońca", Some(["Niedziela", "Poniedziałek", "Wtorek", "Środa", "Czwartek", "Piątek", "Sobota"]))),
    ("pt", labels("Nascer do sol", "Por do sol", Some(["Domingo", "Segunda-feira", "Terça-feira", "Quarta-feira", "Quinta-feira", "Sexta-feira", "Sábado"]))),
    ("pa", labels("ਸੂਰਜ ਚੜ੍ਹਨਾ", "ਸੂਰਜ ਡੁੱਬਣ", None)),
    ("ro", labels("Răsărit", "Apus de soare", Some(["Duminică", "Luni", "Marți", "Miercuri", "Joi", "Vineri", "Sâmbătă"]))),
    ("ru", labels("Восход", "Закат", Some(["Воскресенье", "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота"]))),
    ("sr", labels("Излазак сунца", "Залазак сунца", Some(["Недеља", "Понедељак", "Уторак", "Среда", "Четвртак", "Петак", "Субота"]))),
    ("si", labels("සඳළුව", "හිරු බැස යෑමයි", None)),
    ("sk", labels("Východ slnka", "Západ slnka", Some(["Nedeľa", "Pondelok", "Utorok", "Streda", "Štvrtok", "Piatok", "Sobota"]))),
    ("es", labels("Amanecer", "Atardecer", Some(["Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado"]))),
    ("sv", labels("Soluppgång", "Solnedgång", Some(["Söndag", "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag"]))),
    ("ta", labels("சூரிய உதயம்", "சூரிய அஸ்தமனம்", None)),
    ("te", labels("సూర్యోదయం", "సూర్యాస్తమయం", None)),
    ("tr", labels("Gün doğumu", "Gün batımı", Some(["Pazar", "Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma", "Cumartesi"]))),
    ("uk", labels("Схід сонця", "Захід сонця", Some(["Неділя", "Понеділок", "Вівторок", "Середа", "Четвер", "П'ятниця", "Субота"]))),
    ("ur", labels("طلوع آفتاب", "غروب آفتاب", Some(["اتوار", "پیر", "منگل", "بدھ", "جمعرات", "جمعہ", "ہفتہ"]))),
    ("vi", labels("Bình minh", "Hoàng hôn", Some(["Chủ nhật", "Thứ hai", "Thứ ba", "Thứ tư", "Thứ năm", "Thứ sáu", "Thứ bảy"]))),
    ("zu", labels("Ukuphuma kwelanga", "Ukushona kwelanga", None)),
];

static LABELS: LazyLock<HashMap<&'static str, LanguageLabels>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

/// Whether the table has an entry for `code`
#[must_use]
pub fn is_supported(code: &str) -> bool {
    LABELS.contains_key(code)
}

/// Labels for `code`, or the English labels when the code is unknown
#[must_use]
pub fn labels_for(code: &str) -> LanguageLabels {
    LABELS
        .get(code)
        .or_else(|| LABELS.get(FALLBACK_LANGUAGE))
        .copied()
        .unwrap_or(labels("Sunrise", "Sunset", Some(ENGLISH_WEEKDAYS)))
}

#[must_use]
pub fn sunrise_label(code: &str) -> &'static str {
    labels_for(code).sunrise
}

#[must_use]
pub fn sunset_label(code: &str) -> &'static str {
    labels_for(code).sunset
}

/// Weekday name for an index counted from Sunday (0) to Saturday (6)
///
/// Falls back to the English name, then to a placeholder.
#[must_use]
pub fn lookup_weekday(code: &str, index: usize) -> &'static str {
    let translated = |code: &str| {
        LABELS
            .get(code)
            .and_then(|labels| labels.weekdays)
            .and_then(|names| names.get(index).copied())
    };

    translated(code)
        .or_else(|| translated(FALLBACK_LANGUAGE))
        .unwrap_or(UNLOCALIZED_WEEKDAY)
}

/// Localized name of `weekday`
#[must_use]
pub fn weekday_label(code: &str, weekday: Weekday) -> &'static str {
    lookup_weekday(code, weekday.num_days_from_sunday() as usize)
}
