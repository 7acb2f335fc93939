pub mod events;
pub mod game;
pub mod teams;

pub use events::{
    Competition, Competitor, CompetitorTeam, EventStatus, RawScore, ScheduleEvent,
    ScheduleResponse, StatusType,
};
pub use game::{Game, GameSide, Schedule, Side, TeamSnapshot};
pub use teams::{LeagueEntry, Logo, SportEntry, Team, TeamWrapper, TeamsResponse};
