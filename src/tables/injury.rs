// src/tables/injury.rs
use std::sync::LazyLock;

use super::SubstitutionTable;
use crate::vocab::InjuryType;

/// Injury reasons as they appear in report tooltips, mapped to one or more
/// injury types. Laterality, plurals and misspellings fold onto the base
/// type; compound labels like `SHOULDER_BACK` expand to several.
///
/// The empty key covers a tooltip with no reason text.
pub static INJURY_REASON_SUBSTITUTIONS: LazyLock<SubstitutionTable<InjuryType>> =
    LazyLock::new(|| SubstitutionTable::new(ENTRIES));

const ENTRIES: &[(&str, &[InjuryType])] = &[
    ("", &[InjuryType::Undisclosed]),
    ("10_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("ABDOMDEN", &[InjuryType::Abdomen]),
    ("ABDOMINA", &[InjuryType::Abdomen]),
    ("ABDOMINAL", &[InjuryType::Abdomen]),
    ("ABS", &[InjuryType::CoreMuscle]),
    ("ACHILLIES", &[InjuryType::Achilles]),
    ("AHOULDER", &[InjuryType::Shoulder]),
    ("AMKLE", &[InjuryType::Ankle]),
    ("ANCHILLES", &[InjuryType::Achilles]),
    ("ANKILE", &[InjuryType::Ankle]),
    ("ANKKLE", &[InjuryType::Ankle]),
    ("ANKLES", &[InjuryType::Ankle]),
    ("APPENDECTOMY", &[InjuryType::Appendix]),
    ("ARCH", &[InjuryType::Foot]),
    ("BECK", &[InjuryType::Back]),
    ("BICEP", &[InjuryType::Biceps]),
    ("BILATERAL_GROIN", &[InjuryType::Groin]),
    ("BOTHKNEES", &[InjuryType::Knee]),
    ("BROKEN_FOOT", &[InjuryType::Foot]),
    ("BURNER", &[InjuryType::Stinger]),
    ("BUTTOCKS", &[InjuryType::Glute]),
    ("CONCUSISION", &[InjuryType::Concussion]),
    ("CONCUSSION_PROTOCOL", &[InjuryType::Concussion]),
    ("CORE", &[InjuryType::CoreMuscle]),
    ("COREMUSCLE", &[InjuryType::CoreMuscle]),
    ("DB", &[InjuryType::Shoulder]),
    ("DISLOCATED_WRIST", &[InjuryType::Wrist]),
    ("EIGHT_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("EYELID", &[InjuryType::Eye]),
    ("FACE", &[InjuryType::Facial]),
    ("FACIALLACERATION", &[InjuryType::Facial]),
    ("FACIAL_LACERATIONS", &[InjuryType::Facial]),
    ("FEET", &[InjuryType::Foot]),
    ("FIVE_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("FLU", &[InjuryType::Illness]),
    ("FLU_LIKE_SYMPTOMS", &[InjuryType::Illness]),
    ("FOOT_SURGERY", &[InjuryType::Foot]),
    ("FOREAM", &[InjuryType::Forearm]),
    ("FOUR_GAME_SUSPENSION", &[InjuryType::Suspension]),
    ("FOUR_GAME_SUSPENSIONS_SERVED", &[InjuryType::SuspensionServed]),
    ("FOUR_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("FRACTURED_LEFT_FOOT", &[InjuryType::Foot]),
    ("FRACTURED_RIGHT_FOOT", &[InjuryType::Foot]),
    ("GENERAL_MEDICAL_ISSUE", &[InjuryType::Illness]),
    ("GLUTEUS", &[InjuryType::Glute]),
    ("HAMSTING", &[InjuryType::Hamstring]),
    ("HAMSTIRNG", &[InjuryType::Hamstring]),
    ("HAMSTRINGS", &[InjuryType::Hamstring]),
    ("HEADACHE", &[InjuryType::Headaches]),
    ("HIIP", &[InjuryType::Hip]),
    ("HIPS", &[InjuryType::Hip]),
    ("HMASTRING", &[InjuryType::Hamstring]),
    ("INFECTION", &[InjuryType::Illness]),
    ("KNE", &[InjuryType::Knee]),
    ("KNEES", &[InjuryType::Knee]),
    ("LEFTANKLE", &[InjuryType::Ankle]),
    ("LEFTCALF", &[InjuryType::Calf]),
    ("LEFTELBOW", &[InjuryType::Elbow]),
    ("LEFTFINGER", &[InjuryType::Finger]),
    ("LEFTFOOT", &[InjuryType::Foot]),
    ("LEFTGROIN", &[InjuryType::Groin]),
    ("LEFTHAMSTRING", &[InjuryType::Hamstring]),
    ("LEFTHAND", &[InjuryType::Hand]),
    ("LEFTHIP", &[InjuryType::Hip]),
    ("LEFTKNEE", &[InjuryType::Knee]),
    ("LEFTQUADRICEPS", &[InjuryType::Quadriceps]),
    ("LEFTSHIN", &[InjuryType::Shin]),
    ("LEFTSHOULDER", &[InjuryType::Shoulder]),
    ("LEFTTHIGH", &[InjuryType::Thigh]),
    ("LEFTTHUMB", &[InjuryType::Thumb]),
    ("LEFTUPPERARM", &[InjuryType::UpperArm]),
    ("LEFTWRIST", &[InjuryType::Wrist]),
    ("LEFT_ANKLE", &[InjuryType::Ankle]),
    ("LEFT_ARM", &[InjuryType::Arm]),
    ("LEFT_BICEPS", &[InjuryType::Biceps]),
    ("LEFT_CALF", &[InjuryType::Calf]),
    ("LEFT_ELBOW", &[InjuryType::Elbow]),
    ("LEFT_EYE", &[InjuryType::Eye]),
    ("LEFT_FINGER", &[InjuryType::Finger]),
    ("LEFT_FOOT", &[InjuryType::Foot]),
    ("LEFT_FOREARM", &[InjuryType::Forearm]),
    ("LEFT_GROIN", &[InjuryType::Groin]),
    ("LEFT_HAMSTRING", &[InjuryType::Hamstring]),
    ("LEFT_HAND", &[InjuryType::Hand]),
    ("LEFT_HIP", &[InjuryType::Hip]),
    ("LEFT_KNEE", &[InjuryType::Knee]),
    ("LEFT_LEG", &[InjuryType::Leg]),
    ("LEFT_QUADRICEP", &[InjuryType::Quadriceps]),
    ("LEFT_QUADRICEPS", &[InjuryType::Quadriceps]),
    ("LEFT_SHIN", &[InjuryType::Shin]),
    ("LEFT_SHOULDER", &[InjuryType::Shoulder]),
    ("LEFT_THIGH", &[InjuryType::Thigh]),
    ("LEFT_THUMB", &[InjuryType::Thumb]),
    ("LEFT_TOE", &[InjuryType::Toe]),
    ("LEFT_UPPER_ARM", &[InjuryType::UpperArm]),
    ("LEFT_WRIST", &[InjuryType::Wrist]),
    ("LOWERLEG", &[InjuryType::LowerLeg]),
    ("LOWER_BACK", &[InjuryType::Lumbar]),
    ("MEDICALILLNESS", &[InjuryType::Illness]),
    ("MIGRAINE", &[InjuryType::Migraines]),
    ("NACK", &[InjuryType::Neck]),
    ("NINE_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("NON_FOOTBALL_ILLNESS", &[InjuryType::Illness]),
    ("NOTINJURYRELATED", &[InjuryType::NotInjuryRelated]),
    ("ONE_GAME_SUSPENSION", &[InjuryType::Suspension]),
    ("ONE_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("OTHER_STINGER", &[InjuryType::Stinger]),
    ("QUAD", &[InjuryType::Quadriceps]),
    ("QUADRICEP", &[InjuryType::Quadriceps]),
    ("QUARICEPS", &[InjuryType::Quadriceps]),
    ("RB", &[InjuryType::Ribs]),
    ("RIB", &[InjuryType::Ribs]),
    ("RIBCAGE", &[InjuryType::Ribs]),
    ("RIB_CAGE", &[InjuryType::Ribs]),
    ("RIGHTANKLE", &[InjuryType::Ankle]),
    ("RIGHTCALF", &[InjuryType::Calf]),
    ("RIGHTELBOW", &[InjuryType::Elbow]),
    ("RIGHTFINGER", &[InjuryType::Finger]),
    ("RIGHTFOOT", &[InjuryType::Foot]),
    ("RIGHTGROIN", &[InjuryType::Groin]),
    ("RIGHTHAMSTRING", &[InjuryType::Hamstring]),
    ("RIGHTHAND", &[InjuryType::Hand]),
    ("RIGHTHIP", &[InjuryType::Hip]),
    ("RIGHTKNEE", &[InjuryType::Knee]),
    ("RIGHTQUADRICEP", &[InjuryType::Quadriceps]),
    ("RIGHTSHIN", &[InjuryType::Shin]),
    ("RIGHTSHOULDER", &[InjuryType::Shoulder]),
    ("RIGHTTHIGH", &[InjuryType::Thigh]),
    ("RIGHTTHUMB", &[InjuryType::Thumb]),
    ("RIGHTUPPERARM", &[InjuryType::UpperArm]),
    ("RIGHTWRIST", &[InjuryType::Wrist]),
    ("RIGHT_ANKLE", &[InjuryType::Ankle]),
    ("RIGHT_ARM", &[InjuryType::Arm]),
    ("RIGHT_BICEPS", &[InjuryType::Biceps]),
    ("RIGHT_CALF", &[InjuryType::Calf]),
    ("RIGHT_ELBOW", &[InjuryType::Elbow]),
    ("RIGHT_EYE", &[InjuryType::Eye]),
    ("RIGHT_FINGER", &[InjuryType::Finger]),
    ("RIGHT_FOOT", &[InjuryType::Foot]),
    ("RIGHT_FOREARM", &[InjuryType::Forearm]),
    ("RIGHT_GROIN", &[InjuryType::Groin]),
    ("RIGHT_HAMSTRING", &[InjuryType::Hamstring]),
    ("RIGHT_HAND", &[InjuryType::Hand]),
    ("RIGHT_HIP", &[InjuryType::Hip]),
    ("RIGHT_KNEE", &[InjuryType::Knee]),
    ("RIGHT_LEG", &[InjuryType::Leg]),
    ("RIGHT_QUADRICEP", &[InjuryType::Quadriceps]),
    ("RIGHT_QUADRICEPS", &[InjuryType::Quadriceps]),
    ("RIGHT_SHIN", &[InjuryType::Shin]),
    ("RIGHT_SHOULDER", &[InjuryType::Shoulder]),
    ("RIGHT_THIGH", &[InjuryType::Thigh]),
    ("RIGHT_THUMB", &[InjuryType::Thumb]),
    ("RIGHT_TOE", &[InjuryType::Toe]),
    ("RIGHT_UPPER_ARM", &[InjuryType::UpperArm]),
    ("RIGHT_WRIST", &[InjuryType::Wrist]),
    ("SEVEN_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("SHORTNESSOFBREATH", &[InjuryType::ShortnessOfBreath]),
    ("SHOULDERS", &[InjuryType::Shoulder]),
    ("SHOULDER_BACK", &[InjuryType::Shoulder, InjuryType::Back]),
    ("SHOULDER_FOOT", &[InjuryType::Shoulder, InjuryType::Foot]),
    ("SHOULDET", &[InjuryType::Shoulder]),
    ("SIX_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("SPRAINED_LEFT_FOOT", &[InjuryType::Foot]),
    ("SPRAINED_MCL", &[InjuryType::Mcl]),
    ("SPRAINED_RIGHT_FOOT", &[InjuryType::Foot]),
    ("STERNOCLAVICULAR", &[InjuryType::Sternum, InjuryType::Clavicle]),
    ("TEETH", &[InjuryType::Dental]),
    ("TEN_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("THREE_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("TOES", &[InjuryType::Toe]),
    ("TOOTH", &[InjuryType::Dental]),
    ("TORN_LEFT_ACL", &[InjuryType::TornAcl]),
    ("TORN_PECTORAL_MUSCLE", &[InjuryType::Pectoral]),
    ("TORN_RIGHT_ACL", &[InjuryType::TornAcl]),
    ("TRICEP", &[InjuryType::Triceps]),
    ("TWO_GAME_SUSPENSION_SERVED", &[InjuryType::SuspensionServed]),
    ("VIRUS", &[InjuryType::Illness]),
];
