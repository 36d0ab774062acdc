mod common;
pub use self::common::{Query, QueryCommon};

mod player;
pub use self::player::PlayerQuery;

mod team;
pub use self::team::TeamQuery;

mod scrim;
pub use self::scrim::{ScrimFormatFilter, ScrimQuery};
