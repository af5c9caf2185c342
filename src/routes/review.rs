use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::Client;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::review::{Review, ReviewSubmission};

/*
    /api/reviews (POST)
*/
pub async fn submit_review(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    input: web::Json<ReviewSubmission>,
) -> impl Responder {
    let client = data.into_inner();
    let submission = input.into_inner();

    if !(1..=5).contains(&submission.rating) {
        return HttpResponse::BadRequest().body("Rating must be between 1 and 5");
    }

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let curr_time = Utc::now();
    let review = Review {
        id: None,
        user_id,
        rating: submission.rating,
        comment: submission.comment,
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };

    let collection: mongodb::Collection<Review> =
        client.database("Travelers").collection("Reviews");

    match collection.insert_one(&review).await {
        Ok(_) => HttpResponse::Ok().json(review),
        Err(err) => {
            eprintln!("Failed to insert review: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to submit review")
        }
    }
}

/*
    /api/reviews (GET)
*/
pub async fn get_reviews(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Review> =
        client.database("Travelers").collection("Reviews");

    let cursor = collection
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .limit(100)
        .await;

    match cursor {
        Ok(cursor) => match cursor.try_collect::<Vec<Review>>().await {
            Ok(reviews) => HttpResponse::Ok().json(reviews),
            Err(err) => {
                eprintln!("Failed to collect reviews: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to process reviews")
            }
        },
        Err(err) => {
            eprintln!("Failed to retrieve reviews: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve reviews")
        }
    }
}
