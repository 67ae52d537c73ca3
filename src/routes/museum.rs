use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::museum::{MuseumForm, MuseumsQuery, UpdateMuseumForm};
use crate::repository::DieselRepository;
use crate::routes::run_blocking;
use crate::services::{ServiceError, museum as museum_service};

#[get("/museums")]
pub async fn list_museums(
    repo: web::Data<DieselRepository>,
    web::Query(query): web::Query<MuseumsQuery>,
) -> Result<HttpResponse, ServiceError> {
    let filters = query.parse()?;

    let page = run_blocking(move || museum_service::list_museums(repo.get_ref(), filters)).await?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/museums/{museum_id}")]
pub async fn show_museum(
    repo: web::Data<DieselRepository>,
    museum_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let museum_id = museum_id.into_inner();

    let museum =
        run_blocking(move || museum_service::get_museum(repo.get_ref(), &museum_id)).await?;

    Ok(HttpResponse::Ok().json(museum))
}

#[post("/museums")]
pub async fn create_museum(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<MuseumForm>,
) -> Result<HttpResponse, ServiceError> {
    let museum = run_blocking(move || museum_service::create_museum(repo.get_ref(), form)).await?;

    Ok(HttpResponse::Created().json(museum))
}

#[put("/museums/{museum_id}")]
pub async fn update_museum(
    repo: web::Data<DieselRepository>,
    museum_id: web::Path<String>,
    web::Json(form): web::Json<UpdateMuseumForm>,
) -> Result<HttpResponse, ServiceError> {
    let museum_id = museum_id.into_inner();

    let museum = run_blocking(move || {
        museum_service::update_museum(repo.get_ref(), &museum_id, form)
    })
    .await?;

    Ok(HttpResponse::Ok().json(museum))
}

#[delete("/museums/{museum_id}")]
pub async fn delete_museum(
    repo: web::Data<DieselRepository>,
    museum_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let museum_id = museum_id.into_inner();

    run_blocking(move || museum_service::delete_museum(repo.get_ref(), &museum_id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
