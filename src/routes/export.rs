use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use bson::{doc, oid::ObjectId};
use mongodb::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::trip::ItineraryRecord;
use crate::services::export_service;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/*
    /api/trips/export?format=txt|pdf
*/
pub async fn export_itinerary(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    query: web::Query<ExportQuery>,
) -> impl Responder {
    let client = data.into_inner();

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let collection: mongodb::Collection<ItineraryRecord> =
        client.database("Travelers").collection("Itineraries");

    // Most recent itinerary generated by this user
    let record = match collection
        .find_one(doc! { "user_id": user_id })
        .sort(doc! { "created_at": -1 })
        .await
    {
        Ok(Some(record)) => record,
        Ok(None) => return HttpResponse::NotFound().body("No itinerary to export"),
        Err(err) => {
            eprintln!("Failed to load itinerary: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load itinerary");
        }
    };

    let format = query.into_inner().format.unwrap_or_else(|| "pdf".to_string());

    if format == "txt" {
        return txt_attachment(&record.raw_text);
    }

    match export_service::render_pdf(&record.raw_text) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(attachment_header(export_service::PDF_FILENAME))
            .body(bytes),
        Err(err) => {
            // Fall back to the text attachment rather than failing the export
            eprintln!("PDF rendering failed: {:?}", err);
            txt_attachment(&record.raw_text)
        }
    }
}

fn txt_attachment(text: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(attachment_header(export_service::TXT_FILENAME))
        .body(text.to_string())
}

fn attachment_header(filename: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename.to_string())],
    }
}
