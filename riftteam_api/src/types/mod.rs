mod rank;
pub use self::rank::{Activity, Ambiance, Division, Role, Tier};

mod account;
pub use self::account::{RiotCheckResponse, TokenAction, TokenInfo};

mod player;
pub use self::player::{
    ChampionResponse, PlayerCreateRequest, PlayerListResponse, PlayerResponse, PlayerUpdateRequest,
};

mod team;
pub use self::team::{
    NameAvailability, PlayerSummary, TeamCreateRequest, TeamListResponse, TeamMemberResponse,
    TeamResponse, TeamUpdateRequest,
};

mod scrim;
pub use self::scrim::{ScrimFormat, ScrimListResponse, ScrimResponse};
