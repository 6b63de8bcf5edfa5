use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    application::usecases::parcels::ParcelUseCase,
    domain::repositories::parcels::ParcelRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        sqlite::{repositories::parcels::ParcelSqlite, sqlite_connection::SqlitePoolSquad},
    },
    ui::{
        intake_form::IntakeForm,
        label::Label,
        layout::{escape, page},
        record::{render_lookup_form, render_record, render_record_list},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    barcode: Option<String>,
}

pub fn routes(db_pool: Arc<SqlitePoolSquad>) -> Router {
    let parcel_repository = ParcelSqlite::new(Arc::clone(&db_pool));
    let parcel_usecase = ParcelUseCase::new(Arc::new(parcel_repository));

    Router::new()
        .route("/", get(index))
        .route("/user", get(intake_page).post(submit_intake))
        .route("/mailroom", get(mailroom_page))
        .with_state(Arc::new(parcel_usecase))
}

pub async fn index() -> Redirect {
    Redirect::to("/user")
}

fn intake_document(form: &IntakeForm, below_form: &str) -> String {
    let body = format!(
        "<p>Please fill out the following form to generate your shipping code</p>\n{form}\n{below_form}",
        form = form.render(),
    );
    page("User View", &body)
}

pub async fn intake_page() -> Html<String> {
    Html(intake_document(&IntakeForm::default(), ""))
}

/// Creates a parcel from the submitted form. Success clears the form and
/// shows the label for the new barcode; failure keeps what was entered.
pub async fn submit_intake<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let form = IntakeForm::from_pairs(
        fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str())),
    );

    match parcel_usecase.create(form.to_create_model()).await {
        Ok(barcode) => {
            info!(%barcode, "pages: intake form submitted");
            let label = Label {
                barcode,
                user_id: form.user_id,
                file_id: form.file_id,
            }
            .render()?;
            Ok(Html(intake_document(&IntakeForm::default(), &label)).into_response())
        }
        Err(err) => {
            error!(error = ?err, "pages: intake form could not be saved");
            let message = r#"<p class="error">The shipment could not be saved. Please check the address fields and try again.</p>"#;
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(intake_document(&form, message)),
            )
                .into_response())
        }
    }
}

/// Lookup view: the record for `?barcode=` (if any) with its label, and the
/// list of every barcode on file.
pub async fn mailroom_page<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    Query(query): Query<LookupQuery>,
) -> Result<Html<String>, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let barcode = query.barcode.unwrap_or_default();
    let barcode = barcode.trim();

    let parcel = if barcode.is_empty() {
        None
    } else {
        parcel_usecase.get_one(barcode).await?
    };
    let parcels = parcel_usecase.get_all().await?;

    let not_found = if !barcode.is_empty() && parcel.is_none() {
        format!("<p>No record for barcode {}</p>", escape(barcode))
    } else {
        String::new()
    };

    let label = match &parcel {
        Some(parcel) => Label {
            barcode: parcel.barcode.clone(),
            user_id: parcel.user_id.clone().unwrap_or_default(),
            file_id: parcel.file_id.clone().unwrap_or_default(),
        }
        .render()?,
        None => String::new(),
    };

    let body = format!(
        "{lookup}\n{not_found}\n{record}\n{label}\n{list}",
        lookup = render_lookup_form(barcode),
        record = render_record(parcel.as_ref()),
        list = render_record_list(&parcels),
    );

    Ok(Html(page("Mailroom", &body)))
}
