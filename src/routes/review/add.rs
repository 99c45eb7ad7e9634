use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views::review::Linked;
use actix_web::{post, web, HttpRequest, HttpResponse, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add review.", skip(req, service))]
#[post("")]
pub async fn add_handler(
    req: HttpRequest,
    form: web::Json<forms::review::Add>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(JsonResponse::build().form_error(errors));
    }

    let review = service.create_review(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(Linked::new(review, &super::base_url(&req))))
}
