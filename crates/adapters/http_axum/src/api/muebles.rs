//! REST handlers for muebles.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Form, FromRequest, Path, Query, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use muebles_app::ports::{CodeGenerator, MuebleRepository};
use muebles_domain::error::{MueblesError, NotFoundError, ValidationError};
use muebles_domain::filter::ListFilter;
use muebles_domain::id::Code;
use muebles_domain::mueble::{Mueble, MuebleFields};

use crate::error::ApiError;
use crate::state::AppState;

const CREATED: &str = "Registro creado";
const UPDATED: &str = "Registro actualizado";
const DELETED: &str = "Registro eliminado";

/// Query parameters for the list endpoint.
///
/// Only one filter is honoured: category, then minimum, then maximum price.
/// The short names win over their long aliases.
#[derive(Debug, Default, PartialEq)]
pub struct ListQuery {
    pub categoria: Option<String>,
    pub precio_gte: Option<String>,
    pub precio_igual_mayor_que: Option<String>,
    pub precio_lte: Option<String>,
    pub precio_igual_menor_que: Option<String>,
}

impl ListQuery {
    /// Collect the known keys from raw query pairs.
    ///
    /// A repeated key keeps its first non-blank value. Unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            if value.trim().is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                "categoria" => &mut query.categoria,
                "precio_gte" => &mut query.precio_gte,
                "precio_igual_mayor_que" => &mut query.precio_igual_mayor_que,
                "precio_lte" => &mut query.precio_lte,
                "precio_igual_menor_que" => &mut query.precio_igual_menor_que,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    fn into_filter(self) -> ListFilter {
        ListFilter::resolve(
            self.categoria.as_deref(),
            self.precio_gte.or(self.precio_igual_mayor_que).as_deref(),
            self.precio_lte.or(self.precio_igual_menor_que).as_deref(),
        )
    }
}

/// Request body for creating or updating a mueble.
///
/// Every field is optional at the wire level so that a missing one surfaces as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct MuebleRequest {
    pub nombre: Option<String>,
    pub precio: Option<PriceInput>,
    pub categoria: Option<String>,
}

/// A price sent either as a JSON number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Blank text reads as zero (missing); anything else unparsable as NaN.
    fn value(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) if text.trim().is_empty() => 0.0,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl MuebleRequest {
    fn into_fields(self) -> Result<MuebleFields, MueblesError> {
        let mut builder = MuebleFields::builder();
        if let Some(name) = self.nombre {
            builder = builder.name(name);
        }
        if let Some(price) = self.precio {
            builder = builder.price(price.value());
        }
        if let Some(category) = self.categoria {
            builder = builder.category(category);
        }
        builder.build()
    }
}

/// `{payload}` envelope.
#[derive(Serialize)]
pub struct PayloadBody<T> {
    pub payload: T,
}

/// `{message, payload}` envelope.
#[derive(Serialize)]
pub struct MessagePayloadBody<T> {
    pub message: &'static str,
    pub payload: T,
}

/// `{message}` envelope.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<PayloadBody<Vec<Mueble>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PayloadBody<Mueble>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<MessagePayloadBody<Mueble>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<MessagePayloadBody<Mueble>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integer cannot name any record.
fn parse_code(raw: &str) -> Result<Code, ApiError> {
    Code::from_str(raw).map_err(|_| {
        ApiError::from(MueblesError::from(NotFoundError {
            entity: "Mueble",
            id: raw.to_owned(),
        }))
    })
}

fn malformed(reason: String) -> ApiError {
    ApiError::from(MueblesError::from(ValidationError::MalformedBody(reason)))
}

/// Create/update body, read as a url-encoded form when the request says so
/// and as JSON otherwise.
pub struct MuebleBody(pub MuebleRequest);

impl<S> FromRequest<S> for MuebleBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(request) = Form::<MuebleRequest>::from_request(req, state)
                .await
                .map_err(|rejection| malformed(rejection.body_text()))?;
            Ok(Self(request))
        } else {
            let Json(request) = Json::<MuebleRequest>::from_request(req, state)
                .await
                .map_err(|rejection| malformed(rejection.body_text()))?;
            Ok(Self(request))
        }
    }
}

/// `GET /muebles?categoria=&precio_gte=&precio_lte=`
pub async fn list<R, G>(
    State(state): State<AppState<R, G>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    let pairs = params.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "unreadable query string, listing unfiltered");
        Vec::new()
    });
    let muebles = state
        .mueble_service
        .list_muebles(ListQuery::from_pairs(pairs).into_filter())
        .await?;
    Ok(ListResponse::Ok(Json(PayloadBody { payload: muebles })))
}

/// `GET /muebles/:codigo`
pub async fn get<R, G>(
    State(state): State<AppState<R, G>>,
    Path(codigo): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    let code = parse_code(&codigo)?;
    let mueble = state.mueble_service.get_mueble(code).await?;
    Ok(GetResponse::Ok(Json(PayloadBody { payload: mueble })))
}

/// `POST /muebles`
pub async fn create<R, G>(
    State(state): State<AppState<R, G>>,
    MuebleBody(request): MuebleBody,
) -> Result<CreateResponse, ApiError>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    let fields = request.into_fields()?;
    let created = state.mueble_service.create_mueble(fields).await?;
    Ok(CreateResponse::Created(Json(MessagePayloadBody {
        message: CREATED,
        payload: created,
    })))
}

/// `PUT /muebles/:codigo`
pub async fn update<R, G>(
    State(state): State<AppState<R, G>>,
    Path(codigo): Path<String>,
    MuebleBody(request): MuebleBody,
) -> Result<UpdateResponse, ApiError>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    let fields = request.into_fields()?;
    let code = parse_code(&codigo)?;
    let updated = state.mueble_service.update_mueble(code, fields).await?;
    Ok(UpdateResponse::Ok(Json(MessagePayloadBody {
        message: UPDATED,
        payload: updated,
    })))
}

/// `DELETE /muebles/:codigo`
pub async fn delete<R, G>(
    State(state): State<AppState<R, G>>,
    Path(codigo): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    let code = parse_code(&codigo)?;
    state.mueble_service.delete_mueble(code).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody { message: DELETED })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> MuebleRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_accept_numeric_price() {
        let fields = request(r#"{"nombre":"Silla","precio":100,"categoria":"Sillas"}"#)
            .into_fields()
            .unwrap();
        assert!((fields.price - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_coerce_string_price() {
        let fields = request(r#"{"nombre":"Silla","precio":" 99.5 ","categoria":"Sillas"}"#)
            .into_fields()
            .unwrap();
        assert!((fields.price - 99.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_missing_fields() {
        let result = request(r#"{"nombre":"Silla","categoria":"Sillas"}"#).into_fields();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingPrice))
        ));

        let result = request(r#"{"precio":10,"categoria":"Sillas"}"#).into_fields();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingName))
        ));

        let result = request(r#"{"nombre":"Silla","precio":10}"#).into_fields();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingCategory))
        ));
    }

    #[test]
    fn should_reject_non_numeric_string_price() {
        let result = request(r#"{"nombre":"Silla","precio":"caro","categoria":"Sillas"}"#)
            .into_fields();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::InvalidPrice(_)))
        ));
    }

    #[test]
    fn should_ignore_client_supplied_code() {
        let fields = request(r#"{"codigo":77,"nombre":"Silla","precio":1,"categoria":"Sillas"}"#)
            .into_fields()
            .unwrap();
        assert_eq!(fields.name, "Silla");
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn should_resolve_filter_from_aliases() {
        let query = ListQuery::from_pairs(pairs(&[("precio_igual_menor_que", "250")]));
        assert_eq!(query.into_filter(), ListFilter::MaxPrice(250.0));

        let query = ListQuery::from_pairs(pairs(&[
            ("precio_igual_mayor_que", "10"),
            ("precio_lte", "5"),
        ]));
        assert_eq!(query.into_filter(), ListFilter::MinPrice(10.0));
    }

    #[test]
    fn should_prefer_short_name_over_alias() {
        let query = ListQuery::from_pairs(pairs(&[
            ("precio_igual_mayor_que", "20"),
            ("precio_gte", "10"),
        ]));
        assert_eq!(query.into_filter(), ListFilter::MinPrice(10.0));

        let query = ListQuery::from_pairs(pairs(&[
            ("precio_gte", " "),
            ("precio_igual_mayor_que", "20"),
        ]));
        assert_eq!(query.into_filter(), ListFilter::MinPrice(20.0));
    }

    #[test]
    fn should_keep_first_value_of_repeated_key() {
        let query = ListQuery::from_pairs(pairs(&[
            ("categoria", "Sillas"),
            ("categoria", "Mesas"),
            ("orden", "desc"),
        ]));
        assert_eq!(query.into_filter(), ListFilter::Category("Sillas".into()));
    }
}
