use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views::review::{links, Collection, Linked};
use actix_web::{get, web, HttpRequest, HttpResponse, Result};

#[tracing::instrument(name = "Get reviews of a product.", skip(req, service))]
#[get("/product/{product_id}")]
pub async fn product_list_handler(
    req: HttpRequest,
    path: web::Path<(i64,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    let reviews = service.get_reviews_by_product_id(product_id).await?;

    if reviews.is_empty() {
        return Err(JsonResponse::build()
            .not_found(format!("No reviews found for product {}", product_id)));
    }

    Ok(HttpResponse::Ok().json(Collection::new(
        reviews,
        &super::base_url(&req),
        links::product_reviews_path(product_id),
    )))
}

#[tracing::instrument(name = "Get reviews of a user.", skip(req, service))]
#[get("/user/{user_id}")]
pub async fn user_list_handler(
    req: HttpRequest,
    path: web::Path<(i64,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let (user_id,) = path.into_inner();
    let reviews = service.get_reviews_by_user_id(user_id).await?;

    if reviews.is_empty() {
        return Err(
            JsonResponse::build().not_found(format!("No reviews found for user {}", user_id))
        );
    }

    Ok(HttpResponse::Ok().json(Collection::new(
        reviews,
        &super::base_url(&req),
        links::user_reviews_path(user_id),
    )))
}

#[tracing::instrument(name = "Get review.", skip(req, service))]
#[get("/{id}")]
pub async fn item_handler(
    req: HttpRequest,
    path: web::Path<(i64,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let (id,) = path.into_inner();

    service
        .get_review_by_id(id)
        .await?
        .map(|review| HttpResponse::Ok().json(Linked::new(review, &super::base_url(&req))))
        .ok_or_else(|| JsonResponse::build().not_found(format!("Review {} not found", id)))
}
