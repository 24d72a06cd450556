//! Ukrainian display names for exercise data delivered in English.

const DEFAULT_EXERCISE_NAME: &str = "Вправа";
const NOT_AVAILABLE: &str = "N/A";

enum Pattern {
    /// The whole name equals the given text.
    Exact(&'static str),
    /// Every group contains at least one alternative found in the name.
    All(&'static [&'static [&'static str]]),
}

impl Pattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(text) => name == *text,
            Pattern::All(groups) => groups
                .iter()
                .all(|alternatives| alternatives.iter().any(|a| name.contains(a))),
        }
    }
}

use Pattern::{All, Exact};

/// Ordered translation rules. The first matching rule wins.
const EXERCISE_NAME_RULES: &[(Pattern, &str)] = &[
    // biceps
    (All(&[&["barbell curl"]]), "Підйом штанги на біцепс"),
    (
        All(&[&["barbell prone incline curl", "prone incline curl"]]),
        "Підйом штанги на біцепс лежачи на похилій лавці",
    ),
    (
        All(&[&["barbell standing reverse grip curl", "reverse grip curl"]]),
        "Підйом штанги на біцепс зворотним хватом",
    ),
    (All(&[&["hammer curl"]]), "Молоткові підйоми"),
    (All(&[&["concentration curl"]]), "Концентровані підйоми"),
    (All(&[&["dumbbell curl"]]), "Підйом гантелей на біцепс"),
    // chest
    (
        All(&[&["assisted chest dip"], &["kneeling"]]),
        "Віджимання на брусах з допомогою (на колінах)",
    ),
    (
        All(&[&[
            "barbell decline wide-grip press",
            "barbell decline wide grip press",
        ]]),
        "Жим штанги на похилій лавці широким хватом",
    ),
    (
        All(&[&["cable incline bench press"]]),
        "Жим на похилій лавці з канатним тренажером",
    ),
    // serratus
    (
        All(&[&["smith incline shoulder raise"]]),
        "Підйом плечей на тренажері Сміта на похилій лавці",
    ),
    (
        All(&[&["barbell incline shoulder raise"]]),
        "Підйом плечей зі штангою на похилій лавці",
    ),
    (
        All(&[&["dumbbell incline shoulder raise"]]),
        "Підйом плечей з гантелями на похилій лавці",
    ),
    (
        All(&[&["incline shoulder raise"]]),
        "Підйом плечей на похилій лавці",
    ),
    (
        All(&[&["shoulder raise"], &["serratus"]]),
        "Підйом плечей для серратних м'язів",
    ),
    // cardio
    (
        All(&[&["jumping jacks", "стрибки з розведенням"]]),
        "Стрибки з розведенням рук",
    ),
    (All(&[&["burpee", "берпі"]]), "Берпі"),
    (All(&[&["mountain climber", "альпініст"]]), "Альпініст"),
    (All(&[&["jump rope", "скакалка"]]), "Стрибки на скакалці"),
    (Exact("run"), "Біг"),
    (All(&[&["run"], &["equipment"]]), "Біг"),
    (All(&[&["running", "біг"]]), "Біг"),
    (All(&[&["cycling", "велосипед"]]), "Велосипед"),
    (All(&[&["jumping", "стрибки"]]), "Стрибки"),
    // adductors
    (
        All(&[&["butterfly yoga", "поза метелика"]]),
        "Поза метелика (йога)",
    ),
    (
        All(&[&["cable hip adduction", "зведення стегна на блоці"]]),
        "Зведення стегна на блоці",
    ),
    (
        All(&[&["lever seated hip adduction", "зведення стегна сидячи"]]),
        "Зведення стегна сидячи на тренажері",
    ),
    (All(&[&["side lunge", "бічні випади"]]), "Бічні випади"),
    (
        All(&[&["adductor", "аддуктор"]]),
        "Вправа для приводячих м'язів",
    ),
    // lats
    (
        All(&[&["gironda sternum chin", "підтягування джиронда"]]),
        "Підтягування Джиронда до грудей",
    ),
    (
        All(&[&["cable pulldown"], &["pro lat", "профі-лат"]]),
        "Тяга верхнього блоку з профі-латовою рукояткою",
    ),
    (
        All(&[&["cable twisting pull", "тяга з поворотом"]]),
        "Тяга з поворотом на блоці",
    ),
    (
        All(&[&["lat pulldown", "тяга верхнього блоку"]]),
        "Тяга верхнього блоку",
    ),
    (All(&[&["pull-up", "підтягування"]]), "Підтягування"),
    (
        All(&[&["bent-over row", "тяга в нахилі"]]),
        "Тяга штанги в нахилі",
    ),
    // traps
    (All(&[&["barbell shrug"]]), "Пожимання плечима зі штангою"),
    (
        All(&[&["пожимання"], &["штанга"]]),
        "Пожимання плечима зі штангою",
    ),
    (All(&[&["dumbbell shrug"]]), "Пожимання плечима з гантелями"),
    (
        All(&[&["пожимання"], &["гантел"]]),
        "Пожимання плечима з гантелями",
    ),
    (All(&[&["face pull"]]), "Тяга до обличчя з канатом"),
    (All(&[&["тяга"], &["обличчя"]]), "Тяга до обличчя з канатом"),
    (All(&[&["shrug", "пожимання"]]), "Пожимання плечами"),
    (All(&[&["trap", "трапеці"]]), "Вправа для трапецій"),
    // triceps
    (
        All(&[&["dumbbell kickback"]]),
        "Розгинання трицепса з гантеллю в нахилі",
    ),
    (
        All(&[&["розгинання"], &["нахилі"]]),
        "Розгинання трицепса з гантеллю в нахилі",
    ),
    (
        All(&[&["neutral grip bench press"]]),
        "Жим гантелей нейтральним хватом лежачи",
    ),
    (
        All(&[&["жим"], &["нейтральним"]]),
        "Жим гантелей нейтральним хватом лежачи",
    ),
    (
        All(&[&["handstand push-up", "віджимання в стійці"]]),
        "Віджимання в стійці на руках",
    ),
    (
        All(&[&["tricep dip", "віджимання на трицепси"]]),
        "Віджимання на трицепси",
    ),
    (
        All(&[&["tricep extension", "розгинання на трицепси"]]),
        "Розгинання на трицепси",
    ),
    (
        All(&[&["close-grip bench press", "жим вузьким хватом"]]),
        "Жим штанги вузьким хватом",
    ),
    // calves
    (
        All(&[&["calf raise", "підйом на носки"], &["гантел", "dumbbell"]]),
        "Підйом на носки з гантелями стоячи",
    ),
    (
        All(&[&["calf raise", "підйом на носки"], &["сходин", "stair", "step"]]),
        "Підйом на носки на сходинці",
    ),
    (
        All(&[&["calf raise", "підйом на носки"], &["стоячи", "standing"]]),
        "Підйом на носки стоячи",
    ),
    (
        All(&[&["calf raise", "підйом на носки"], &["сидячи", "seated"]]),
        "Підйом на носки сидячи",
    ),
    (All(&[&["calf raise", "підйом на носки"]]), "Підйом на носки"),
    // quads
    (All(&[&["squat", "присідання"]]), "Присідання"),
    (All(&[&["leg press"]]), "Жим ногами"),
    (All(&[&["leg extension"]]), "Розгинання ніг"),
    (All(&[&["lunge", "випади"]]), "Випади"),
    // levator scapulae
    (
        All(&[&["side"], &["push"], &["neck"], &["stretch"]]),
        "Бічна розтяжка шиї з натисканням",
    ),
    (
        All(&[&["neck"], &["side"], &["stretch"]]),
        "Бічна розтяжка шиї",
    ),
    (
        All(&[&["levator", "леватор"]]),
        "Вправа для м'язя, що піднімає лопатку",
    ),
    // abs
    (All(&[&["3/4 sit-up", "3/4 sit up"]]), "3/4 підйому тулуба"),
    (All(&[&["45° side bend", "45 side bend"]]), "Бічний нахил 45°"),
    (All(&[&["side"], &["bend"], &["45"]]), "Бічний нахил 45°"),
    (All(&[&["air"], &["bike"]]), "Велосипед"),
    (All(&[&["crunches", "скручування"]]), "Скручування"),
    (All(&[&["leg raises", "підйоми ніг"]]), "Підйоми ніг"),
    (All(&[&["plank", "планка"]]), "Планка"),
];

const TARGETS: &[(&str, &str)] = &[
    ("cardiovascular system", "серцево-судинна система"),
    ("cardiovascular", "серцево-судинна система"),
    ("cardio", "серцево-судинна система"),
    ("biceps", "біцепси"),
    ("pectorals", "грудні м'язи"),
    ("chest", "груди"),
    ("triceps", "трицепси"),
    ("lats", "широчайші м'язи"),
    ("latissimus", "широчайші м'язи"),
    ("traps", "трапеції"),
    ("trapezius", "трапеції"),
    ("calves", "литки"),
    ("quads", "квадріцепси"),
    ("quadriceps", "квадріцепси"),
    ("adductors", "приводячі м'язи"),
    ("serratus anterior", "серратні м'язи"),
    ("serratus", "серратні м'язи"),
    ("levator scapulae", "м'яз, що піднімає лопатку"),
    ("levator", "м'яз, що піднімає лопатку"),
    ("abs", "прес"),
    ("abdominals", "прес"),
    ("shoulders", "плечі"),
    ("back", "спина"),
    ("legs", "ноги"),
    ("arms", "руки"),
];

const BODY_PARTS: &[(&str, &str)] = &[
    ("cardio", "кардіо"),
    ("cardiovascular", "кардіо"),
    ("chest", "груди"),
    ("upper arms", "верхні частини рук"),
    ("lower arms", "передпліччя"),
    ("shoulders", "плечі"),
    ("back", "спина"),
    ("legs", "ноги"),
    ("thighs", "стегна"),
    ("calves", "литки"),
    ("waist", "талія"),
    ("all", "все тіло"),
    ("full body", "все тіло"),
    ("neck", "шия"),
];

const EQUIPMENT: &[(&str, &str)] = &[
    ("run", "бігова доріжка"),
    ("running", "бігова доріжка"),
    ("treadmill", "бігова доріжка"),
    ("barbell", "штанга"),
    ("dumbbell", "гантелі"),
    ("dumbbells", "гантелі"),
    ("body weight", "власна вага"),
    ("bodyweight", "власна вага"),
    ("cable", "канатний тренажер"),
    ("cable machine", "канатний тренажер"),
    ("machine", "тренажер"),
    ("smith machine", "тренажер Сміта"),
    ("pull-up bar", "турнік"),
    ("pullup bar", "турнік"),
    ("dip bar", "бруси"),
    ("dip bars", "бруси"),
    ("kettlebell", "гіря"),
    ("kettlebells", "гірі"),
    ("resistance band", "резинова стрічка"),
    ("resistance bands", "резинові стрічки"),
    ("medicine ball", "медичний м'яч"),
    ("yoga mat", "килимок для йоги"),
    ("foam roller", "пінопроливний ролик"),
    ("none", "власна вага"),
    ("other", "інше"),
];

const ANATOMICAL_IMAGES: &[(&str, &str)] = &[
    ("3/4 sit-up", "/images/z1-anatomical.jpg"),
    ("3/4 підйому тулуба", "/images/z1-anatomical.jpg"),
    ("45° side bend", "/images/z2-anatomical.jpg"),
    ("бічний нахил 45°", "/images/z2-anatomical.jpg"),
    ("45 side bend", "/images/z2-anatomical.jpg"),
    ("air bike", "/images/z3-anatomical.jpg"),
    ("велосипед", "/images/z3-anatomical.jpg"),
];

/// Returns the Ukrainian display name of an exercise.
///
/// Names without a known translation, including names that are already Ukrainian, are
/// returned unchanged.
#[must_use]
pub fn translate_exercise_name(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_EXERCISE_NAME.to_string();
    }
    let name_lower = name.to_lowercase();
    EXERCISE_NAME_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(&name_lower))
        .map_or_else(|| name.to_string(), |(_, translation)| (*translation).to_string())
}

#[must_use]
pub fn translate_target(target: &str) -> String {
    translate_term(target, TARGETS)
}

#[must_use]
pub fn translate_body_part(body_part: &str) -> String {
    translate_term(body_part, BODY_PARTS)
}

#[must_use]
pub fn translate_equipment(equipment: &str) -> String {
    translate_term(equipment, EQUIPMENT)
}

/// Returns the path of a local anatomical illustration for the exercise name, if one exists.
#[must_use]
pub fn anatomical_image(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }
    lookup(name, ANATOMICAL_IMAGES)
}

fn translate_term(term: &str, table: &[(&str, &'static str)]) -> String {
    if term.is_empty() || term == NOT_AVAILABLE {
        return NOT_AVAILABLE.to_string();
    }
    lookup(term, table).map_or_else(|| term.to_string(), str::to_string)
}

fn lookup(term: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    let term_lower = term.to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == term_lower)
        .or_else(|| table.iter().find(|(key, _)| term_lower.contains(key)))
        .map(|(_, value)| *value)
}
