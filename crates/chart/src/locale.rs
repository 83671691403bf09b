//! Label translations
//!
//! Labels only: nothing here affects the numbers. Unknown languages fall back
//! to English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    De,
    Fr,
    Nl,
    It,
    Ko,
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-HK")]
    ZhHk,
    Ja,
    #[serde(rename = "pt-BR", alias = "pt")]
    PtBr,
    Ru,
}

/// Every translatable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    BuyPrice,
    GuaranteedMin,
    DailyPrice,
    Average,
    Maximum,
    Minimum,
    /// Space separated short day names, Monday first
    Weekdays,
    Morning,
    Afternoon,
    InsufficientInformation,
}

/// One language's label set
struct Labels {
    buy_price: &'static str,
    guaranteed_min: &'static str,
    daily_price: &'static str,
    average: &'static str,
    maximum: &'static str,
    minimum: &'static str,
    weekdays: &'static str,
    morning: &'static str,
    afternoon: &'static str,
    insufficient_information: &'static str,
}

const EN: Labels = Labels {
    buy_price: "Buy Price",
    guaranteed_min: "Guaranteed Min",
    daily_price: "Daily Price",
    average: "Average",
    maximum: "Maximum",
    minimum: "Minimum",
    weekdays: "Mon Tue Wed Thu Fri Sat",
    morning: "AM",
    afternoon: "PM",
    insufficient_information: "Insufficient information",
};

const ES: Labels = Labels {
    buy_price: "Precio de compra",
    guaranteed_min: "Mínimo garantizado",
    daily_price: "Precio diario",
    average: "Promedio",
    maximum: "Máximo",
    minimum: "Mínimo",
    weekdays: "Lun Mar Mié Jue Vie Sáb",
    morning: "AM",
    afternoon: "PM",
    insufficient_information: "Información insuficiente",
};

const DE: Labels = Labels {
    buy_price: "Kaufpreis",
    guaranteed_min: "Garantiertes Minimum",
    daily_price: "Tagespreis",
    average: "Durchschnitt",
    maximum: "Maximum",
    minimum: "Minimum",
    weekdays: "Mo Di Mi Do Fr Sa",
    morning: "Vorm.",
    afternoon: "Nachm.",
    insufficient_information: "Unzureichende Informationen",
};

const FR: Labels = Labels {
    buy_price: "Prix d'achat",
    guaranteed_min: "Minimum garanti",
    daily_price: "Prix du jour",
    average: "Moyenne",
    maximum: "Maximum",
    minimum: "Minimum",
    weekdays: "Lun Mar Mer Jeu Ven Sam",
    morning: "matin",
    afternoon: "après-midi",
    insufficient_information: "Informations insuffisantes",
};

const NL: Labels = Labels {
    buy_price: "Aankoopprijs",
    guaranteed_min: "Gegarandeerd minimum",
    daily_price: "Dagprijs",
    average: "Gemiddelde",
    maximum: "Maximum",
    minimum: "Minimum",
    weekdays: "ma di wo do vr za",
    morning: "ochtend",
    afternoon: "middag",
    insufficient_information: "Onvoldoende informatie",
};

const IT: Labels = Labels {
    buy_price: "Prezzo d'acquisto",
    guaranteed_min: "Minimo garantito",
    daily_price: "Prezzo giornaliero",
    average: "Media",
    maximum: "Massimo",
    minimum: "Minimo",
    weekdays: "Lun Mar Mer Gio Ven Sab",
    morning: "mattina",
    afternoon: "pomeriggio",
    insufficient_information: "Informazioni insufficienti",
};

const KO: Labels = Labels {
    buy_price: "구매 가격",
    guaranteed_min: "보장 최저가",
    daily_price: "일일 가격",
    average: "평균",
    maximum: "최대",
    minimum: "최소",
    weekdays: "월 화 수 목 금 토",
    morning: "오전",
    afternoon: "오후",
    insufficient_information: "정보 부족",
};

const ZH_CN: Labels = Labels {
    buy_price: "买入价",
    guaranteed_min: "保证最低价",
    daily_price: "每日价格",
    average: "平均",
    maximum: "最高",
    minimum: "最低",
    weekdays: "周一 周二 周三 周四 周五 周六",
    morning: "上午",
    afternoon: "下午",
    insufficient_information: "信息不足",
};

const ZH_TW: Labels = Labels {
    buy_price: "買入價",
    guaranteed_min: "保證最低價",
    daily_price: "每日價格",
    average: "平均",
    maximum: "最高",
    minimum: "最低",
    weekdays: "週一 週二 週三 週四 週五 週六",
    morning: "上午",
    afternoon: "下午",
    insufficient_information: "資訊不足",
};

const ZH_HK: Labels = Labels {
    buy_price: "買入價",
    guaranteed_min: "保證最低價",
    daily_price: "每日價格",
    average: "平均",
    maximum: "最高",
    minimum: "最低",
    weekdays: "星期一 星期二 星期三 星期四 星期五 星期六",
    morning: "上午",
    afternoon: "下午",
    insufficient_information: "資料不足",
};

const JA: Labels = Labels {
    buy_price: "購入価格",
    guaranteed_min: "最低保証価格",
    daily_price: "日別価格",
    average: "平均",
    maximum: "最大",
    minimum: "最小",
    weekdays: "月 火 水 木 金 土",
    morning: "午前",
    afternoon: "午後",
    insufficient_information: "情報不足",
};

const PT_BR: Labels = Labels {
    buy_price: "Preço de compra",
    guaranteed_min: "Mínimo garantido",
    daily_price: "Preço diário",
    average: "Média",
    maximum: "Máximo",
    minimum: "Mínimo",
    weekdays: "Seg Ter Qua Qui Sex Sáb",
    morning: "manhã",
    afternoon: "tarde",
    insufficient_information: "Informações insuficientes",
};

const RU: Labels = Labels {
    buy_price: "Цена покупки",
    guaranteed_min: "Гарантированный минимум",
    daily_price: "Дневная цена",
    average: "Среднее",
    maximum: "Максимум",
    minimum: "Минимум",
    weekdays: "Пн Вт Ср Чт Пт Сб",
    morning: "утро",
    afternoon: "вечер",
    insufficient_information: "Недостаточно информации",
};

impl Locale {
    pub const ALL: [Locale; 13] = [
        Locale::En,
        Locale::Es,
        Locale::De,
        Locale::Fr,
        Locale::Nl,
        Locale::It,
        Locale::Ko,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::ZhHk,
        Locale::Ja,
        Locale::PtBr,
        Locale::Ru,
    ];

    /// Resolve a language tag such as `"es-MX"`, `"zh_TW"` or `"pt"`, falling back to English
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        let mut subtags = tag.split(['-', '_']);
        let primary = subtags.next().unwrap_or_default();

        match primary {
            "es" => Locale::Es,
            "de" => Locale::De,
            "fr" => Locale::Fr,
            "nl" => Locale::Nl,
            "it" => Locale::It,
            "ko" => Locale::Ko,
            "ja" => Locale::Ja,
            "pt" => Locale::PtBr,
            "ru" => Locale::Ru,
            "zh" => {
                let mut locale = Locale::ZhCn;
                for subtag in subtags {
                    match subtag {
                        "hk" | "mo" => return Locale::ZhHk,
                        "tw" | "hant" => locale = Locale::ZhTw,
                        _ => {}
                    }
                }
                locale
            }
            _ => Locale::En,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Nl => "nl",
            Locale::It => "it",
            Locale::Ko => "ko",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
            Locale::ZhHk => "zh-HK",
            Locale::Ja => "ja",
            Locale::PtBr => "pt-BR",
            Locale::Ru => "ru",
        }
    }

    fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
            Locale::De => &DE,
            Locale::Fr => &FR,
            Locale::Nl => &NL,
            Locale::It => &IT,
            Locale::Ko => &KO,
            Locale::ZhCn => &ZH_CN,
            Locale::ZhTw => &ZH_TW,
            Locale::ZhHk => &ZH_HK,
            Locale::Ja => &JA,
            Locale::PtBr => &PT_BR,
            Locale::Ru => &RU,
        }
    }

    pub fn label(&self, key: LabelKey) -> &'static str {
        let labels = self.labels();
        match key {
            LabelKey::BuyPrice => labels.buy_price,
            LabelKey::GuaranteedMin => labels.guaranteed_min,
            LabelKey::DailyPrice => labels.daily_price,
            LabelKey::Average => labels.average,
            LabelKey::Maximum => labels.maximum,
            LabelKey::Minimum => labels.minimum,
            LabelKey::Weekdays => labels.weekdays,
            LabelKey::Morning => labels.morning,
            LabelKey::Afternoon => labels.afternoon,
            LabelKey::InsufficientInformation => labels.insufficient_information,
        }
    }

    /// `"<day> <half>"` for every slot, Monday morning first
    pub fn slot_labels(&self) -> Vec<String> {
        let morning = self.label(LabelKey::Morning);
        let afternoon = self.label(LabelKey::Afternoon);

        self.label(LabelKey::Weekdays)
            .split(' ')
            .flat_map(|day| [format!("{} {}", day, morning), format!("{} {}", day, afternoon)])
            .collect()
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalk_core::SLOTS;

    #[test]
    fn test_tag_resolution() {
        assert_eq!(Locale::from_tag("es-MX"), Locale::Es);
        assert_eq!(Locale::from_tag("de_AT"), Locale::De);
        assert_eq!(Locale::from_tag("FR"), Locale::Fr);
        assert_eq!(Locale::from_tag("pt"), Locale::PtBr);
        assert_eq!(Locale::from_tag("pt-PT"), Locale::PtBr);
        assert_eq!(Locale::from_tag("ja-JP"), Locale::Ja);
        assert_eq!(Locale::from_tag("sv"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_chinese_variants() {
        assert_eq!(Locale::from_tag("zh"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("zh_TW"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("zh-Hant"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("zh-HK"), Locale::ZhHk);
        assert_eq!(Locale::from_tag("zh-Hant-HK"), Locale::ZhHk);
    }

    #[test]
    fn test_tag_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), locale, "{}", locale);
        }
    }

    #[test]
    fn test_slot_labels_cover_window() {
        for locale in Locale::ALL {
            assert_eq!(locale.slot_labels().len(), SLOTS, "{}", locale);
        }
        let labels = Locale::En.slot_labels();
        assert_eq!(labels[0], "Mon AM");
        assert_eq!(labels[1], "Mon PM");
        assert_eq!(labels[11], "Sat PM");

        assert_eq!(Locale::Ja.slot_labels()[0], "月 午前");
    }
}
