//! Info reader.

use super::{InfoMap, InfoReport, InfoValue};
use crate::error::{Error, Result};
use crate::flags::{CurlInfo, INFO_NAMES};
use crate::model::ResponseDescription;
use crate::utils::get_content_length;

use tracing::{debug, trace};

/// Reads transfer metadata from a response.
///
/// `CurlInfo::All` returns every field of the info name table, pulling
/// each one through [`ResponseDescription::info`] and keeping missing
/// values as empty entries. The status code comes from the response's
/// own status, and the download size from its `Content-Length` header.
/// Every other flag is delegated to [`ResponseDescription::info`].
///
/// # Errors
///
/// [`Error::UnsupportedInfo`] when a single flag resolves to no value.
pub fn read<R>(response: &R, info: CurlInfo) -> Result<InfoReport>
where
    R: ResponseDescription + ?Sized,
{
    let value = match info.canonical() {
        CurlInfo::All => {
            let mut map = InfoMap::default();
            for (flag, name) in INFO_NAMES {
                map.push(*name, response.info(*flag));
            }
            trace!("Collected {} info fields", map.len());
            return Ok(InfoReport::All(map));
        }
        CurlInfo::HttpCode => Some(InfoValue::Long(i64::from(response.status_code()))),
        CurlInfo::SizeDownload => get_content_length(response)
            .map(|length| InfoValue::Double(length as f64))
            .or_else(|| response.header("Content-Length").map(InfoValue::from)),
        other => response.info(other),
    };

    match value {
        Some(value) => Ok(InfoReport::Single(value)),
        None => {
            debug!("No value for {} ({})", info.name(), info.code());
            Err(Error::UnsupportedInfo {
                name: info.name(),
                code: info.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Response;

    fn response() -> Response {
        Response::new(
            200,
            vec![("Content-Type", "text/plain"), ("Content-Length", "5")],
            "hello",
        )
        .with_info(CurlInfo::HttpCode, 500)
        .with_info(CurlInfo::EffectiveUrl, "http://example.com/")
    }

    #[test]
    fn test_status_code_uses_status_not_recorded_info() {
        let report = read(&response(), CurlInfo::HttpCode).unwrap();
        assert_eq!(report, InfoReport::Single(InfoValue::Long(200)));
    }

    #[test]
    fn test_download_size_uses_content_length() {
        let report = read(&response(), CurlInfo::SizeDownload).unwrap();
        assert_eq!(report.as_single(), Some(&InfoValue::Double(5.0)));
    }

    #[test]
    fn test_download_size_passes_unparsable_header_through() {
        let response = Response::new(200, vec![("Content-Length", "lots")], "");
        let report = read(&response, CurlInfo::SizeDownload).unwrap();
        assert_eq!(report.as_single(), Some(&InfoValue::from("lots")));
    }

    #[test]
    fn test_download_size_without_header_is_unsupported() {
        let response = Response::new(200, Vec::<(String, String)>::new(), "");
        let err = read(&response, CurlInfo::SizeDownload).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedInfo {
                name: "CURLINFO_SIZE_DOWNLOAD",
                code: 3145736
            }
        ));
    }

    #[test]
    fn test_other_flags_use_recorded_info() {
        let report = read(&response(), CurlInfo::EffectiveUrl).unwrap();
        assert_eq!(report.as_single(), Some(&InfoValue::from("http://example.com/")));
    }

    #[test]
    fn test_unknown_flag_names_itself() {
        let err = read(&response(), CurlInfo::Other(7)).unwrap_err();
        assert_eq!(err.to_string(), "Not implemented: CURLINFO_UNKNOWN (7)");
    }

    #[test]
    fn test_aggregate_reads_recorded_info_for_every_field() {
        let report = read(&response(), CurlInfo::All).unwrap();
        let map = report.as_all().unwrap();

        assert_eq!(map.len(), INFO_NAMES.len());
        let keys: Vec<_> = map.keys().collect();
        let expected: Vec<_> = INFO_NAMES.iter().map(|(_, name)| *name).collect();
        assert_eq!(keys, expected);

        assert_eq!(map.get("http_code"), Some(&InfoValue::Long(500)));
        assert_eq!(map.get("url"), Some(&InfoValue::from("http://example.com/")));
        assert_eq!(map.get("total_time"), None);
    }

    #[test]
    fn test_aggregate_never_fails_on_empty_response() {
        let response = Response::new(204, Vec::<(String, String)>::new(), "");
        let report = read(&response, CurlInfo::from_code(0)).unwrap();
        let map = report.as_all().unwrap();
        assert!(map.iter().all(|(_, value)| value.is_none()));
    }
}
