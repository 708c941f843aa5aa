use url::Url;

/// Path of the public calendar endpoint, relative to the API host.
pub const CALENDAR_BY_DISTRICT_PATH: &str =
    "/api/v2/appointment/sessions/public/calendarByDistrict";

/// What to ask the API for. Values are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    pub district_id: i64,
    /// `DD-MM-YYYY`.
    pub date: String,
}

/// A ready-to-send GET: target URL plus the identifying header.
#[derive(Debug, Clone)]
pub struct CalendarRequest {
    url: Url,
    user_agent: String,
}

impl CalendarRequest {
    /// Build the GET for `query` against `base_url` (scheme and host, e.g. `https://cdn-api.co-vin.in`).
    pub fn build(
        base_url: &str,
        user_agent: &str,
        query: &CalendarQuery,
    ) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(base_url)?.join(CALENDAR_BY_DISTRICT_PATH)?;
        url.query_pairs_mut()
            .append_pair("district_id", &query.district_id.to_string())
            .append_pair("date", &query.date);
        Ok(Self {
            url,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Header lines in `Name: value` form, as handed to the transport.
    pub fn header_lines(&self) -> Vec<String> {
        vec![format!("User-Agent: {}", self.user_agent.trim())]
    }
}
