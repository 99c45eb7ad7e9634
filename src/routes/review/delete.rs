use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use actix_web::{delete, web, HttpResponse, Result};

#[tracing::instrument(name = "Delete review.", skip(service))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i64,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();

    match service.delete_review(id).await? {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(JsonResponse::build().not_found(format!("Review {} not found", id))),
    }
}
