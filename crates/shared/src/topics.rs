//! Topic and destination names, and id generation

use crate::protocol::ClientMessage;
use uuid::Uuid;

/// Endpoint that creates a game and returns its id
pub const CREATE_GAME_PATH: &str = "/api/games/create";

/// Game-wide broadcast topic
pub fn game_topic(game_id: &str) -> String {
    format!("/topic/game/{game_id}")
}

/// Private topic for one player in a game
pub fn player_topic(game_id: &str, player_id: &str) -> String {
    format!("/topic/game/{game_id}/player/{player_id}")
}

/// Publish destination for an outbound message
pub fn destination(game_id: &str, message: &ClientMessage) -> String {
    format!("/app/game/{game_id}/{}", message.route())
}

/// Fresh client-side player id, `player_<uuid>`
pub fn new_player_id() -> String {
    format!("player_{}", Uuid::new_v4().simple())
}

/// Fresh game id, used where the client hosts the game itself
pub fn new_game_id() -> String {
    Uuid::new_v4().to_string()
}
