// src/vocab/injury.rs

vocabulary! {
    /// Reason a player appears on an injury report.
    pub enum InjuryType {
        Abdomen => "ABDOMEN",
        Achilles => "ACHILLES",
        Ankle => "ANKLE",
        Appendix => "APPENDIX",
        Arm => "ARM",
        Arrhythmia => "ARRHYTHMIA",
        Back => "BACK",
        Biceps => "BICEPS",
        BloodClots => "BLOOD_CLOTS",
        BloodDisorder => "BLOOD_DISORDER",
        C19 => "C19",
        Calf => "CALF",
        Chest => "CHEST",
        Chin => "CHIN",
        Clavicle => "CLAVICLE",
        CoachsDecision => "COACHS_DECISION",
        Collarbone => "COLLARBONE",
        Concussion => "CONCUSSION",
        Conditioning => "CONDITIONING",
        CoreMuscle => "CORE_MUSCLE",
        Dehydration => "DEHYDRATION",
        Dental => "DENTAL",
        Disciplinary => "DISCIPLINARY",
        Ear => "EAR",
        Elbow => "ELBOW",
        Eligibility => "ELIGIBILITY",
        Eye => "EYE",
        Facial => "FACIAL",
        Fibula => "FIBULA",
        Finger => "FINGER",
        Foot => "FOOT",
        Forearm => "FOREARM",
        Glute => "GLUTE",
        Groin => "GROIN",
        Hamstring => "HAMSTRING",
        Hand => "HAND",
        Head => "HEAD",
        Headaches => "HEADACHES",
        Heart => "HEART",
        Heat => "HEAT",
        HeatCramps => "HEAT_CRAMPS",
        Heel => "HEEL",
        Hernia => "HERNIA",
        Hip => "HIP",
        HipFlexor => "HIP_FLEXOR",
        Holdout => "HOLDOUT",
        Illness => "ILLNESS",
        Jaw => "JAW",
        Kidney => "KIDNEY",
        Knee => "KNEE",
        Leg => "LEG",
        Legal => "LEGAL",
        Liver => "LIVER",
        LowerLeg => "LOWER_LEG",
        Lumbar => "LUMBAR",
        Lung => "LUNG",
        Mcl => "MCL",
        Migraines => "MIGRAINES",
        Mouth => "MOUTH",
        Neck => "NECK",
        Nose => "NOSE",
        NotFootballRelated => "NOT_FOOTBALL_RELATED",
        NotInjuryRelated => "NOT_INJURY_RELATED",
        Oblique => "OBLIQUE",
        Pectoral => "PECTORAL",
        Pelvis => "PELVIS",
        Personal => "PERSONAL",
        Quadriceps => "QUADRICEPS",
        Rest => "REST",
        Ribs => "RIBS",
        Scapula => "SCAPULA",
        Seizure => "SEIZURE",
        Shin => "SHIN",
        ShortnessOfBreath => "SHORTNESS_OF_BREATH",
        Shoulder => "SHOULDER",
        Solarplexus => "SOLARPLEXUS",
        Spine => "SPINE",
        Spleen => "SPLEEN",
        SportsHernia => "SPORTS_HERNIA",
        Sternum => "STERNUM",
        Stinger => "STINGER",
        Stomach => "STOMACH",
        Suspension => "SUSPENSION",
        SuspensionServed => "SUSPENSION_SERVED",
        Tailbone => "TAILBONE",
        Thigh => "THIGH",
        Throat => "THROAT",
        Thumb => "THUMB",
        Tibia => "TIBIA",
        Toe => "TOE",
        TornAcl => "TORN_ACL",
        Trapezius => "TRAPEZIUS",
        Triceps => "TRICEPS",
        Undisclosed => "UNDISCLOSED",
        UpperArm => "UPPER_ARM",
        UpperBody => "UPPER_BODY",
        Wrist => "WRIST",
    }
}

vocabulary! {
    /// Status a player is listed with on an injury report.
    pub enum InjuryStatus {
        Doubtful => "DOUBTFUL",
        InjuredReserve => "INJURED_RESERVE",
        Out => "OUT",
        PhysicallyUnableToPerform => "PHYSICALLY_UNABLE_TO_PERFORM",
        Probable => "PROBABLE",
        Questionable => "QUESTIONABLE",
        Suspended => "SUSPENDED",
        C19 => "C19",
        ReserveOrFuture => "RESERVE_OR_FUTURE",
        InjuredFromWaived => "INJURED_FROM_WAIVED",
    }
}

vocabulary! {
    /// Whether a listed player ended up playing that week.
    pub enum InjuryOutcome {
        DidNotPlay => "DID_NOT_PLAY",
        Played => "PLAYED",
    }
}
