pub mod find_cmd;
pub mod team_cmd;
pub mod tournament_cmd;

pub use find_cmd::cmd_find;
pub use team_cmd::cmd_team;
pub use tournament_cmd::cmd_tournament;
