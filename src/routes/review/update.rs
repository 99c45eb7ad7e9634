use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views::review::Linked;
use actix_web::{put, web, HttpRequest, HttpResponse, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Update review.", skip(req, service))]
#[put("/{id}")]
pub async fn update_handler(
    req: HttpRequest,
    path: web::Path<(i64,)>,
    form: web::Json<forms::review::Edit>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(JsonResponse::build().form_error(errors));
    }

    let (id,) = path.into_inner();
    let review = service.update_review(id, form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Linked::new(review, &super::base_url(&req))))
}
