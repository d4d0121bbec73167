use common::MemoId;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    // read when the bundle is built
    pub(crate) fn from_build_env() -> Self {
        Self::new(option_env!("MEMO_API_BASE_URL"))
    }

    pub(crate) fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/');
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub(crate) fn memos_url(&self) -> String {
        format!("{}/api/memos", self.base_url)
    }

    pub(crate) fn memo_url(&self, id: MemoId) -> String {
        format!("{}/api/memos/{}", self.base_url, id)
    }
}

pub(crate) fn log_level_from_build_env() -> log::Level {
    parse_log_level(option_env!("MEMO_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
