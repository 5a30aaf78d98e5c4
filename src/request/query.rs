//! Search query construction
//!
//! Filters map one-to-one onto the export API's query parameters. Wildcard
//! patterns (`%`) are passed through untouched apart from percent-encoding;
//! the API does the matching.

use url::Url;

use crate::cli::args::Args;
use crate::errors::RbdlError;

/// Repeater search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub callsign: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub frequency: Option<String>,
    pub mode: Option<String>,
    pub landmark: Option<String>,
    pub state_id: Option<String>,
    pub region: Option<String>,
    pub stype: Option<String>,
}

impl SearchFilters {
    /// Collect the search filters from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            callsign: args.callsign.clone(),
            city: args.city.clone(),
            country: args.country.clone(),
            frequency: args.frequency.clone(),
            mode: args.mode.clone(),
            landmark: args.landmark.clone(),
            state_id: args.state.clone(),
            region: args.region.clone(),
            stype: args.stype.clone(),
        }
    }

    /// Non-empty parameters as `(key, value)` pairs, sorted by key
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params: Vec<(&'static str, &str)> = [
            ("callsign", &self.callsign),
            ("city", &self.city),
            ("country", &self.country),
            ("frequency", &self.frequency),
            ("mode", &self.mode),
            ("landmark", &self.landmark),
            ("state_id", &self.state_id),
            ("region", &self.region),
            ("stype", &self.stype),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect();

        params.sort_by_key(|(key, _)| *key);
        params
    }

    /// True when no filter has a value
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }

    /// Build the full request URL for `endpoint`
    ///
    /// Without any parameters the endpoint is returned as-is, with no
    /// trailing `?`.
    pub fn build_url(&self, endpoint: &str) -> Result<Url, RbdlError> {
        let mut url = Url::parse(endpoint)?;

        let params = self.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }
}
