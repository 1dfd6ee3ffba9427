use common::admin::soil::SoilEvent;

use crate::auth::AuthContext;

pub enum Msg {
    /// Anything handled by the screen's reducer.
    Soil(SoilEvent),
    /// The delete button of the row with this id was pressed.
    ConfirmDelete(String),
    SessionChanged(AuthContext),
}
