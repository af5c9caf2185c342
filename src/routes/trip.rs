use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::{bson::oid::ObjectId, Client};
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::trip::{ItineraryRecord, TripRequest, TripSummaryResponse};
use crate::services::completion_service::CompletionService;
use crate::services::formatter_service::format_to_html;
use crate::services::prompt_service::build_trip_prompt;

/*
    /api/trips/generate
*/
pub async fn generate_trip(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let request = input.into_inner();

    if request.days < 1 {
        return HttpResponse::BadRequest().body("Trip must cover at least one day");
    }

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let completion_service = match CompletionService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Completion service unavailable: {}", err);
            return HttpResponse::InternalServerError().body("Completion service unavailable");
        }
    };

    let prompt = build_trip_prompt(&request);

    let raw_summary = match completion_service.generate_itinerary(&prompt).await {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Failed to generate itinerary: {}", err);
            return HttpResponse::BadGateway()
                .body(format!("[Error generating itinerary: {}]", err));
        }
    };

    let html = format_to_html(&raw_summary);

    let record = ItineraryRecord {
        id: None,
        user_id,
        destination: request.destination.clone(),
        raw_text: raw_summary,
        html: html.clone(),
        created_at: Some(Utc::now()),
    };

    let collection: mongodb::Collection<ItineraryRecord> =
        client.database("Travelers").collection("Itineraries");

    match collection.insert_one(&record).await {
        Ok(_) => HttpResponse::Ok().json(TripSummaryResponse { summary: html }),
        Err(err) => {
            eprintln!("Failed to store itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to store itinerary.")
        }
    }
}
