//! Currency codes accepted for prices

use crate::CashierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! currencies {
    ($($variant:ident => $code:literal),* $(,)?) => {
        /// Three-letter ISO 4217 currency code, lower-case on the wire
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Currency {
            $(
                #[doc = concat!("`", $code, "`")]
                #[serde(rename = $code)]
                $variant,
            )*
        }

        impl Currency {
            /// Every supported currency
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),*];

            /// Lower-case ISO code
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Currency::$variant => $code,)*
                }
            }
        }

        impl FromStr for Currency {
            type Err = CashierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($code => Ok(Currency::$variant),)*
                    _ => Err(CashierError::invalid_argument("Invalid currency")),
                }
            }
        }
    };
}

currencies! {
    Aed => "aed",
    Ars => "ars",
    Aud => "aud",
    Bgn => "bgn",
    Brl => "brl",
    Cad => "cad",
    Chf => "chf",
    Clp => "clp",
    Cny => "cny",
    Cop => "cop",
    Czk => "czk",
    Dkk => "dkk",
    Egp => "egp",
    Eur => "eur",
    Gbp => "gbp",
    Hkd => "hkd",
    Huf => "huf",
    Idr => "idr",
    Ils => "ils",
    Inr => "inr",
    Isk => "isk",
    Jpy => "jpy",
    Kes => "kes",
    Krw => "krw",
    Mad => "mad",
    Mxn => "mxn",
    Myr => "myr",
    Ngn => "ngn",
    Nok => "nok",
    Nzd => "nzd",
    Pen => "pen",
    Php => "php",
    Pkr => "pkr",
    Pln => "pln",
    Ron => "ron",
    Sar => "sar",
    Sek => "sek",
    Sgd => "sgd",
    Thb => "thb",
    Try => "try",
    Twd => "twd",
    Uah => "uah",
    Usd => "usd",
    Vnd => "vnd",
    Zar => "zar",
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Currency {
    type Error = CashierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = "xyz".parse::<Currency>().unwrap_err();
        assert!(matches!(err, CashierError::InvalidArgument(_)));
        assert!(err.to_string().contains("Invalid currency"));
        assert!(Currency::try_from("").is_err());
    }

    #[test]
    fn test_serializes_lower_case() {
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"gbp\"");
        assert_eq!(Currency::Jpy.to_string(), "jpy");
    }

    #[test]
    fn test_all_codes_round_trip_through_as_str() {
        for currency in Currency::ALL {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), *currency);
        }
    }
}
