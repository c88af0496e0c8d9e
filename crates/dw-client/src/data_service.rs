use crate::{ClientError, ClientResult, Gateway, Method, Outcome, Prefer, Query};

use dw_config::DefaultsConfig;
use dw_core::{
    ChartDataPoint, Folder, HistoryItem, HistoryRecord, LookupRow, NewHistoryRecord,
    NewOutputFile, OutputFile, UserPreference,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FILE_TYPES: &str = "file_types";
const FOLDERS: &str = "folders";
const HISTORY: &str = "history";
const OUTPUT_FILES: &str = "output_files";
const OUTPUT_FORMATS: &str = "output_formats";
const USER_PREFERENCES: &str = "user_preferences";
const FILE_TYPE_STATS_RPC: &str = "get_input_file_type_stats";

const OUTPUT_FILE_COLUMNS: &str = "id,history_id,name,path,size,created_at,history!inner(user_id)";
const HISTORY_ITEM_COLUMNS: &str = "id,input_type:input_file_type_id(name),output_format:output_format_id(name),process_date,processing_time,is_success,process_type";

/// Typed lookups and mutations over the [`Gateway`].
///
/// Lookups return an [`Outcome`] and never fail past this boundary.
/// Mutations return a [`ClientResult`]; failures are also logged at warn.
#[derive(Clone)]
pub struct DataService {
    gateway: Gateway,
    defaults: DefaultsConfig,
}

impl DataService {
    pub fn new(gateway: Gateway, defaults: DefaultsConfig) -> Self {
        Self { gateway, defaults }
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Newest output files produced for a user, at most `count`
    pub async fn recent_files(&self, user_id: Uuid, count: u32) -> Outcome<Vec<OutputFile>> {
        let query = Query::table(OUTPUT_FILES)
            .select(OUTPUT_FILE_COLUMNS)
            .eq("history.user_id", user_id)
            .order_desc("created_at")
            .limit(count);

        let result = self
            .gateway
            .get::<Vec<OutputFile>>(&query)
            .await
            .map(|files| truncated(files, count));

        Self::log_lookup_failure("recent files", &result);
        Outcome::from_list(result, Vec::new)
    }

    /// Most recently updated folders of a user, at most `count`
    pub async fn user_folders(&self, user_id: Uuid, count: u32) -> Outcome<Vec<Folder>> {
        let query = Query::table(FOLDERS)
            .eq("user_id", user_id)
            .order_desc("updated_at")
            .limit(count);

        let result = self
            .gateway
            .get::<Vec<Folder>>(&query)
            .await
            .map(|folders| truncated(folders, count));

        Self::log_lookup_failure("folders", &result);
        Outcome::from_list(result, Vec::new)
    }

    /// Per input-type usage counts for a user
    pub async fn file_type_stats(&self, user_id: Uuid) -> Outcome<Vec<ChartDataPoint>> {
        #[derive(Serialize)]
        struct StatsArgs {
            p_user_id: Uuid,
        }

        let query = Query::rpc(FILE_TYPE_STATS_RPC);
        let args = StatsArgs { p_user_id: user_id };

        let result = self
            .gateway
            .execute::<Vec<ChartDataPoint>, _>(Method::POST, &query, Some(&args), None)
            .await;

        Self::log_lookup_failure("file type stats", &result);
        Outcome::from_list(result, Vec::new)
    }

    /// The user's preferred output format name
    pub async fn preferred_format(&self, user_id: Uuid) -> Outcome<String> {
        #[derive(Deserialize)]
        struct FormatRow {
            format: Option<String>,
        }

        let query = Query::table(USER_PREFERENCES)
            .eq("user_id", user_id)
            .select("format")
            .limit(1);

        let result = self
            .gateway
            .get::<Vec<FormatRow>>(&query)
            .await
            .map(|rows| {
                rows.into_iter()
                    .next()
                    .and_then(|row| row.format)
                    .filter(|format| !format.is_empty())
            });

        Self::log_lookup_failure("format preference", &result);
        Outcome::from_optional(result, || self.defaults.output_format.clone())
    }

    /// Latest processing runs with input type and output format names
    pub async fn recent_history(&self, user_id: Uuid, count: u32) -> Outcome<Vec<HistoryItem>> {
        let query = Query::table(HISTORY)
            .eq("user_id", user_id)
            .select(HISTORY_ITEM_COLUMNS)
            .order_desc("process_date")
            .limit(count);

        let result = self
            .gateway
            .get::<Vec<HistoryItem>>(&query)
            .await
            .map(|items| truncated(items, count));

        Self::log_lookup_failure("recent history", &result);
        Outcome::from_list(result, Vec::new)
    }

    /// Id of an output format; unknown names and failures give the default id
    pub async fn output_format_id(&self, format_name: &str) -> Outcome<i64> {
        let result = self.lookup_id(OUTPUT_FORMATS, format_name).await;

        Self::log_lookup_failure("output format id", &result);
        Outcome::from_optional(result, || self.defaults.output_format_id)
    }

    /// Id of a file type, falling back to the configured catch-all type.
    ///
    /// A missing row or a failed lookup both resolve to the fallback row. The
    /// fallback is looked up once; if it is missing too the result is
    /// [`ClientError::NotFound`]. When `type_name` is the fallback itself there
    /// is nothing to fall back to and a failed lookup is returned as is.
    pub async fn file_type_id(&self, type_name: &str) -> ClientResult<i64> {
        let fallback = self.defaults.fallback_file_type.as_str();

        match self.lookup_id(FILE_TYPES, type_name).await {
            Ok(Some(id)) => return Ok(id),
            Ok(None) if type_name == fallback => {
                return Err(ClientError::not_found(format!("{}.name={}", FILE_TYPES, fallback)));
            }
            Err(e) if type_name == fallback => {
                warn!("Error looking up file type '{}': {}", type_name, e);
                return Err(e);
            }
            Ok(None) => debug!("File type '{}' not found, using '{}'", type_name, fallback),
            Err(e) => warn!(
                "Error looking up file type '{}', using '{}': {}",
                type_name, fallback, e
            ),
        }

        self.lookup_id(FILE_TYPES, fallback)
            .await?
            .ok_or_else(|| ClientError::not_found(format!("{}.name={}", FILE_TYPES, fallback)))
    }

    async fn lookup_id(&self, resource: &str, name: &str) -> ClientResult<Option<i64>> {
        let query = Query::table(resource).eq("name", name).select("id").limit(1);

        let rows = self.gateway.get::<Vec<LookupRow>>(&query).await?;
        Ok(rows.first().map(|row| row.id))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a history row and return the id of the echoed row
    pub async fn create_history(&self, record: &NewHistoryRecord) -> ClientResult<i64> {
        let query = Query::table(HISTORY);

        let result = self
            .gateway
            .execute::<Vec<HistoryRecord>, _>(
                Method::POST,
                &query,
                Some(record),
                Some(Prefer::ReturnRepresentation),
            )
            .await
            .and_then(|rows| {
                rows.first()
                    .map(|row| row.id)
                    .ok_or_else(|| ClientError::not_found(HISTORY))
            });

        Self::log_mutation_failure("logging history", &result);
        result
    }

    /// Record how long a run took
    pub async fn update_history_timing(
        &self,
        history_id: i64,
        processing_time_ms: i32,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct TimingPatch {
            processing_time: i32,
        }

        let body = TimingPatch {
            processing_time: processing_time_ms,
        };
        let result = self.patch_history(history_id, &body).await;

        Self::log_mutation_failure("updating history processing time", &result);
        result
    }

    /// Record whether a run succeeded and how long it took
    pub async fn update_history_status(
        &self,
        history_id: i64,
        is_success: bool,
        processing_time_ms: i32,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct StatusPatch {
            is_success: bool,
            processing_time: i32,
        }

        let body = StatusPatch {
            is_success,
            processing_time: processing_time_ms,
        };
        let result = self.patch_history(history_id, &body).await;

        Self::log_mutation_failure("updating history status", &result);
        result
    }

    async fn patch_history<B: Serialize>(&self, history_id: i64, body: &B) -> ClientResult<()> {
        let query = Query::table(HISTORY).eq("id", history_id);

        self.gateway
            .execute_discarding(
                Method::PATCH,
                &query,
                Some(body),
                Some(Prefer::ReturnMinimal),
            )
            .await
    }

    /// Insert an output file row
    pub async fn log_output_file(&self, file: &NewOutputFile) -> ClientResult<()> {
        let query = Query::table(OUTPUT_FILES);

        let result = self
            .gateway
            .execute_discarding(
                Method::POST,
                &query,
                Some(file),
                Some(Prefer::ReturnMinimal),
            )
            .await;

        Self::log_mutation_failure("logging output file", &result);
        result
    }

    /// Create or replace the user's preferred output format
    pub async fn save_preferred_format(&self, user_id: Uuid, format: &str) -> ClientResult<()> {
        let query = Query::table(USER_PREFERENCES).on_conflict("user_id");
        let preference = UserPreference::new(user_id, format.to_string());

        let result = self
            .gateway
            .execute_discarding(
                Method::POST,
                &query,
                Some(&preference),
                Some(Prefer::UpsertMinimal),
            )
            .await;

        Self::log_mutation_failure("saving format preference", &result);
        result
    }

    fn log_lookup_failure<T>(what: &str, result: &ClientResult<T>) {
        if let Err(e) = result {
            warn!("Error fetching {}: {}", what, e);
        }
    }

    fn log_mutation_failure<T>(what: &str, result: &ClientResult<T>) {
        if let Err(e) = result {
            warn!("Error {}: {}", what, e);
        }
    }
}

/// Servers may ignore `limit`; never hand back more than asked for.
fn truncated<T>(mut rows: Vec<T>, count: u32) -> Vec<T> {
    rows.truncate(count as usize);
    rows
}
