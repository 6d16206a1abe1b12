use crate::domain::model::{Era, HistoricalYear};
use crate::utils::error::InputError;

const BC_MARKER: &str = "bc";
const AD_MARKER: &str = "ad";

/// 解析像 "1900 B.C."、"2020 AD"、"500" 這類的時期輸入
///
/// 紀元標記以子字串比對 (不分大小寫、忽略句點)，BC 優先於 AD。
/// 只有找到標記時才會移除句點；沒有標記的 "500." 視為無效年份。
pub fn parse_time_period(raw: &str) -> Result<HistoricalYear, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InputError::EmptyInput);
    }

    let lowered = input.to_lowercase();
    let undotted = lowered.replace('.', "");

    let (era, remainder) = if undotted.contains(BC_MARKER) {
        (Era::Bc, undotted.replace(BC_MARKER, ""))
    } else if undotted.contains(AD_MARKER) {
        (Era::Ad, undotted.replace(AD_MARKER, ""))
    } else {
        (Era::Unspecified, lowered)
    };

    let value: i64 = remainder.trim().parse().map_err(|e| {
        tracing::debug!("Cannot parse year from '{}': {}", remainder.trim(), e);
        InputError::InvalidYear
    })?;

    let year = match era {
        Era::Bc => value.checked_neg().ok_or(InputError::InvalidYear)?,
        Era::Ad | Era::Unspecified => value,
    };

    tracing::debug!("Parsed '{}' as {:?} year {}", input, era, year);

    Ok(HistoricalYear {
        input: input.to_string(),
        era,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bc_with_periods() {
        let parsed = parse_time_period("1900 B.C.").unwrap();
        assert_eq!(parsed.era, Era::Bc);
        assert_eq!(parsed.year, -1900);
        assert_eq!(parsed.input, "1900 B.C.");
    }

    #[test]
    fn test_parse_ad_and_unmarked() {
        let parsed = parse_time_period("  2020 AD ").unwrap();
        assert_eq!(parsed.era, Era::Ad);
        assert_eq!(parsed.year, 2020);
        assert_eq!(parsed.input, "2020 AD");

        let parsed = parse_time_period("A.D. 33").unwrap();
        assert_eq!(parsed.year, 33);

        let parsed = parse_time_period("500").unwrap();
        assert_eq!(parsed.era, Era::Unspecified);
        assert_eq!(parsed.year, 500);
    }

    #[test]
    fn test_parse_bc_takes_priority_over_ad() {
        // 兩者都出現時走 BC 分支，"ad" 留在剩餘字串裡
        assert_eq!(parse_time_period("100 bc ad"), Err(InputError::InvalidYear));

        let parsed = parse_time_period("bc44").unwrap();
        assert_eq!(parsed.year, -44);
    }

    #[test]
    fn test_parse_marker_is_substring_match() {
        let parsed = parse_time_period("12 BCbc").unwrap();
        assert_eq!(parsed.year, -12);

        // 先去掉句點再找標記，被句點拆開的 "b.c" 也算數
        let parsed = parse_time_period("b.cbc 12").unwrap();
        assert_eq!(parsed.era, Era::Bc);
        assert_eq!(parsed.year, -12);
    }

    #[test]
    fn test_parse_signed_values() {
        assert_eq!(parse_time_period("-300").unwrap().year, -300);
        // 負數再標 BC 會反轉成正數
        assert_eq!(parse_time_period("-300 BC").unwrap().year, 300);
        assert_eq!(parse_time_period("+7 AD").unwrap().year, 7);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_time_period(""), Err(InputError::EmptyInput));
        assert_eq!(parse_time_period(" \t\n"), Err(InputError::EmptyInput));
        assert_eq!(parse_time_period("banana"), Err(InputError::InvalidYear));
        assert_eq!(parse_time_period("500."), Err(InputError::InvalidYear));
        assert_eq!(parse_time_period("12 34 BC"), Err(InputError::InvalidYear));
        assert_eq!(parse_time_period("BC"), Err(InputError::InvalidYear));
        assert_eq!(
            parse_time_period("-9223372036854775808 BC"),
            Err(InputError::InvalidYear)
        );
    }
}
