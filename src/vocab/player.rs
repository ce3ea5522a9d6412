// src/vocab/player.rs

vocabulary! {
    /// Concrete on-field position a player can be credited with.
    pub enum PlayerType {
        C => "C",
        Cb => "CB",
        De => "DE",
        Dt => "DT",
        Fb => "FB",
        Ilb => "ILB",
        K => "K",
        Kr => "KR",
        Og => "OG",
        Olb => "OLB",
        Ot => "OT",
        P => "P",
        Qb => "QB",
        Rb => "RB",
        S => "S",
        St => "ST",
        Te => "TE",
        Wr => "WR",
    }
}
