//! Command execution: every `save` runs one [`EntityForm`] session.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use backoffice_client::{ApiClient, ClientConfig};
use backoffice_core::form::{EntityForm, FormStatus, SharedApi, SubmitOutcome};
use backoffice_core::image::SelectedFile;
use backoffice_core::notify::Notifier;
use backoffice_core::schema::{
    describe_errors, ActivitySchema, CategorySchema, ContentValues, FormSchema, UserSchema,
};
use backoffice_core::types::DbId;

use crate::cli::{Cli, Command, ContentAction, UserAction};
use crate::notifier::ConsoleNotifier;

pub async fn run(cli: Cli, config: ClientConfig) -> anyhow::Result<ExitCode> {
    let config = match cli.api_url {
        Some(url) => config.with_api_url(url),
        None => config,
    };
    tracing::debug!(api_url = %config.api_url, "Using API");

    let client = ApiClient::new(config).context("Failed to build HTTP client")?;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    match cli.command {
        Command::Activities { action } => {
            run_content::<ActivitySchema>(Arc::new(client.activities()), notifier, action).await
        }
        Command::Categories { action } => {
            run_content::<CategorySchema>(Arc::new(client.categories()), notifier, action).await
        }
        Command::Users { action } => {
            let api: SharedApi<UserSchema> = Arc::new(client.users());
            match action {
                UserAction::List => print_json(&api.list().await?),
                UserAction::Show { id } => print_json(&api.get(id).await?),
                UserAction::Save(args) => {
                    let image = args.image.clone();
                    save::<UserSchema>(api, notifier, args.id, image, |values| {
                        args.apply(values)
                    })
                    .await
                }
            }
        }
    }
}

async fn run_content<S>(
    api: SharedApi<S>,
    notifier: Arc<dyn Notifier>,
    action: ContentAction,
) -> anyhow::Result<ExitCode>
where
    S: FormSchema<Values = ContentValues>,
    S::Record: Serialize,
{
    match action {
        ContentAction::List => print_json(&api.list().await?),
        ContentAction::Show { id } => print_json(&api.get(id).await?),
        ContentAction::Save(args) => {
            let image = args.image.clone();
            save::<S>(api, notifier, args.id, image, |values| args.apply(values)).await
        }
    }
}

/// One form session: load, overlay the flags, attach the image, submit.
///
/// Failures have already been reported by the notifier; they only turn
/// into a non-zero exit code here.
async fn save<S: FormSchema>(
    api: SharedApi<S>,
    notifier: Arc<dyn Notifier>,
    id: Option<DbId>,
    image: Option<PathBuf>,
    apply: impl FnOnce(&mut S::Values),
) -> anyhow::Result<ExitCode> {
    let mut form = EntityForm::<S>::new(api, notifier, id);
    form.mount().await;
    if form.status() == FormStatus::Error {
        return Ok(ExitCode::FAILURE);
    }

    apply(form.values_mut());
    if let Some(path) = image {
        form.select_file(SelectedFile::from_path(path));
    }

    let code = match form.submit().await {
        SubmitOutcome::Created | SubmitOutcome::Updated(_) => ExitCode::SUCCESS,
        SubmitOutcome::Invalid(errors) => {
            eprintln!("{} form has errors:", S::ENTITY);
            for (field, message) in describe_errors(&errors) {
                eprintln!("  {field}: {message}");
            }
            ExitCode::FAILURE
        }
        SubmitOutcome::Failed | SubmitOutcome::Busy => ExitCode::FAILURE,
    };
    Ok(code)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use backoffice_core::api::{ApiResult, EntityApi};
    use backoffice_core::error::ApiError;
    use backoffice_core::models::Activity;
    use backoffice_core::notify::Notice;
    use backoffice_core::schema::ContentPayload;

    use super::*;
    use crate::cli::ContentArgs;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(DbId),
        Create(serde_json::Value),
        Update(DbId, serde_json::Value),
    }

    /// In-memory activity collection holding at most one record.
    struct Activities {
        record: Option<Activity>,
        calls: Mutex<Vec<Call>>,
    }

    impl Activities {
        fn new(record: Option<Activity>) -> Arc<Self> {
            Arc::new(Self {
                record,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EntityApi for Activities {
        type Record = Activity;
        type Payload = ContentPayload;

        async fn list(&self) -> ApiResult<Vec<Activity>> {
            Ok(self.record.clone().into_iter().collect())
        }

        async fn get(&self, id: DbId) -> ApiResult<Activity> {
            self.calls.lock().unwrap().push(Call::Get(id));
            self.record.clone().ok_or(ApiError::Status {
                status: 404,
                message: Some("Activity not found".to_string()),
            })
        }

        async fn create(&self, payload: &ContentPayload) -> ApiResult<()> {
            let body = serde_json::to_value(payload).unwrap();
            self.calls.lock().unwrap().push(Call::Create(body));
            Ok(())
        }

        async fn update(&self, id: DbId, payload: &ContentPayload) -> ApiResult<()> {
            let body = serde_json::to_value(payload).unwrap();
            self.calls.lock().unwrap().push(Call::Update(id, body));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Notices(Mutex<Vec<Notice>>);

    impl Notifier for Notices {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    fn yoga() -> Activity {
        Activity {
            id: 5,
            name: "Yoga".to_string(),
            description: "<p>Morning class</p>".to_string(),
            image: Some("data:image/png;base64,c3RvcmVk".to_string()),
        }
    }

    fn args(id: Option<DbId>, name: Option<&str>, description: Option<&str>) -> ContentArgs {
        ContentArgs {
            id,
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            image: None,
        }
    }

    async fn save_activity(
        api: &Arc<Activities>,
        notices: &Arc<Notices>,
        args: ContentArgs,
    ) -> ExitCode {
        save::<ActivitySchema>(api.clone(), notices.clone(), args.id, args.image.clone(), |values| {
            args.apply(values)
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn partial_overlay_keeps_loaded_fields() {
        let api = Activities::new(Some(yoga()));
        let notices = Arc::new(Notices::default());

        let code = save_activity(&api, &notices, args(Some(5), None, Some("<p>Evening</p>"))).await;

        assert_eq!(code, ExitCode::SUCCESS);
        assert_matches!(api.calls().as_slice(), [Call::Get(5), Call::Update(5, body)] => {
            assert_eq!(body["name"], "Yoga");
            assert_eq!(body["description"], "<p>Evening</p>");
            assert!(body.get("image").is_none());
        });
        assert_eq!(notices.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_input_fails_without_a_request() {
        let api = Activities::new(None);
        let notices = Arc::new(Notices::default());

        let code = save_activity(&api, &notices, args(None, Some("Yo"), Some("<p>x</p>"))).await;

        assert_eq!(code, ExitCode::FAILURE);
        assert!(api.calls().is_empty());
        assert!(notices.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_load_sends_no_write() {
        let api = Activities::new(None);
        let notices = Arc::new(Notices::default());

        let code = save_activity(&api, &notices, args(Some(9), Some("Pilates"), None)).await;

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(api.calls(), vec![Call::Get(9)]);
        assert_eq!(
            notices.0.lock().unwrap().as_slice(),
            &[Notice::error("Activity not found")]
        );
    }
}
