// src/vocab/coaching.rs

vocabulary! {
    /// Canonical title of a member of a team's coaching staff.
    pub enum CoachingPosition {
        // Major coaching positions
        HeadCoach => "HEAD_COACH",
        AssistantHeadCoach => "ASSISTANT_HEAD_COACH",
        OffensiveCoordinator => "OFFENSIVE_COORDINATOR",
        // Stored as DEFENSIVE_COORDINATOR; older data spells it DEFENSIVE_COORDNATOR
        DefensiveCoordinator => "DEFENSIVE_COORDINATOR",
        // Offensive position coaches
        Quarterbacks => "QUARTERBACKS",
        AssistantQuarterbacks => "ASSISTANT_QUARTERBACKS",
        RunningBacks => "RUNNING_BACKS",
        AssistantRunningBacks => "ASSISTANT_RUNNING_BACKS",
        WideReceivers => "WIDE_RECEIVERS",
        AssistantWideReceivers => "ASSISTANT_WIDE_RECEIVERS",
        TightEnds => "TIGHT_ENDS",
        AssistantTightEnds => "ASSISTANT_TIGHT_ENDS",
        OffensiveLine => "OFFENSIVE_LINE",
        AssistantOffensiveLine => "ASSISTANT_OFFENSIVE_LINE",
        Ends => "ENDS",
        BackfieldCoach => "BACKFIELD_COACH",
        OffensiveAssistant => "OFFENSIVE_ASSISTANT",
        // Defensive position coaches
        DefensiveLine => "DEFENSIVE_LINE",
        AssistantDefensiveLine => "ASSISTANT_DEFENSIVE_LINE",
        Linebackers => "LINEBACKERS",
        AssistantLinebackers => "ASSISTANT_LINEBACKERS",
        DefensiveBacks => "DEFENSIVE_BACKS",
        AssistantDefensiveBacks => "ASSISTANT_DEFENSIVE_BACKS",
        DefensiveAssistant => "DEFENSIVE_ASSISTANT",
        // Special teams
        SpecialTeamsCoordinator => "SPECIAL_TEAMS_COORDINATOR",
        Kicking => "KICKING",
        // Other/legacy
        Scout => "SCOUT",
        StrengthAndConditioning => "STRENGTH_AND_CONDITIONING",
        /// Catch-all for assistant titles with no more specific home.
        /// Only ever produced by an explicit table entry, never as a default.
        OtherAssistant => "OTHER_ASSISTANT",
    }
}
