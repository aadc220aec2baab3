//! HTTP surface for the blackjack engine. Serves one round at a time: a POST to
//! `/round` starts a fresh round, `/round/hit` and `/round/stand` drive it, and a
//! GET on `/round` returns the current snapshot with the dealer's hole card masked
//! until the round resolves.

use actix_web::{
    body::BoxBody,
    error, get,
    http::{header::ContentType, StatusCode},
    post, web, App, HttpResponse, HttpServer,
};
use blackjack_core::prelude::*;
use std::sync::Mutex;

/// An enum that will handle user facing errors
#[derive(Debug)]
enum UserError {
    InternalError,
    NoActiveRound,
    RoundError(String),
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::InternalError => write!(f, "an internal error occured"),
            UserError::NoActiveRound => write!(
                f,
                "no round is in progress, start one with a POST to /round"
            ),
            UserError::RoundError(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for UserError {}

impl error::ResponseError for UserError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            UserError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            UserError::NoActiveRound => StatusCode::BAD_REQUEST,
            UserError::RoundError(_) => StatusCode::CONFLICT,
        }
    }
}

/// A handler that starts a fresh round, replacing whatever round was active before.
#[post("/round")]
async fn start_round(
    app_round: web::Data<Mutex<Option<Round>>>,
) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_round.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    match Round::start() {
        Ok((round, view)) => {
            *guard = Some(round);
            Ok(HttpResponse::Ok().json(view))
        }
        Err(e) => Err(UserError::RoundError(e.to_string())),
    }
}

/// A handler that applies a hit to the active round.
#[post("/round/hit")]
async fn hit(app_round: web::Data<Mutex<Option<Round>>>) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_round.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(round) = guard.as_mut() {
        return match round.hit() {
            Ok(view) => Ok(HttpResponse::Ok().json(view)),
            Err(e) => Err(UserError::RoundError(e.to_string())),
        };
    }

    Err(UserError::NoActiveRound)
}

/// A handler that ends the player's turn and runs the dealer out on the active round.
#[post("/round/stand")]
async fn stand(app_round: web::Data<Mutex<Option<Round>>>) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_round.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(round) = guard.as_mut() {
        return match round.stand() {
            Ok(view) => Ok(HttpResponse::Ok().json(view)),
            Err(e) => Err(UserError::RoundError(e.to_string())),
        };
    }

    Err(UserError::NoActiveRound)
}

/// A handler that returns the current round state without acting on it.
#[get("/round")]
async fn current_round(
    app_round: web::Data<Mutex<Option<Round>>>,
) -> Result<HttpResponse, UserError> {
    let guard = if let Ok(g) = app_round.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(round) = guard.as_ref() {
        let body = match serde_json::to_string(&round.view()) {
            Ok(b) => b,
            Err(_) => return Err(UserError::InternalError),
        };
        return Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body));
    }

    Err(UserError::NoActiveRound)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let address = "127.0.0.1";
    let port = 8080;
    println!("Listening at {}:{}...", address, port);

    let app_round: web::Data<Mutex<Option<Round>>> = web::Data::new(Mutex::new(None));

    HttpServer::new(move || {
        App::new()
            .app_data(app_round.clone())
            .service(start_round)
            .service(hit)
            .service(stand)
            .service(current_round)
    })
    .bind((address, port))?
    .run()
    .await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_view_serializes_the_collaborator_fields() {
        let deck = Deck::from_cards(vec![
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Diamonds),
        ]);
        let (round, _) = Round::deal(deck).unwrap();
        let json = serde_json::to_value(round.view()).unwrap();

        assert_eq!(json["player"], "10 of Hearts, 9 of Clubs");
        assert_eq!(json["player_total"], 19);
        assert_eq!(json["dealer"], "King of Spades, [Hidden]");
        assert_eq!(json["dealer_total"], serde_json::Value::Null);
        assert_eq!(json["is_over"], false);
    }

    #[test]
    fn stand_view_serializes_a_terminal_outcome() {
        let deck = Deck::from_cards(vec![
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Diamonds),
        ]);
        let (mut round, _) = Round::deal(deck).unwrap();
        let json = serde_json::to_value(round.stand().unwrap()).unwrap();

        assert_eq!(json["dealer"], "King of Spades, 7 of Diamonds");
        assert_eq!(json["dealer_total"], 17);
        assert_eq!(json["is_over"], true);
        assert_eq!(json["outcome"], "PlayerWin");
    }
}
