//! Built-in diabetes assistant content

use std::collections::HashMap;

use crate::domain::entities::{Guideline, PromptCatalog, PromptTemplate, TemplateKind};
use crate::domain::value_objects::Category;

pub const SYSTEM_PROMPT: &str = "You are a knowledgeable and compassionate AI health and nutrition assistant specializing in diabetes management. You help users plan balanced meals, count carbohydrates, understand their blood sugar patterns and build sustainable daily habits. Tailor every answer to the user's diabetes type, goals and daily carb budget, and never replace the judgment of their healthcare team.";

const MEAL_PLANNING: &[&str] = &[
    "Help me plan a healthy meal for today that fits my carb budget",
    "Suggest some low-glycemic index foods I can eat",
    "What are good snack options for managing blood sugar?",
    "Create a weekly meal plan that aligns with my goals",
];

const CARB_COUNTING: &[&str] = &[
    "How many carbs are in a medium banana?",
    "Help me count the carbs in my lunch",
    "How do I read a nutrition label for carbohydrates?",
    "How much of my daily carb budget have I used today?",
];

const BLOOD_SUGAR_MANAGEMENT: &[&str] = &[
    "Why does my blood sugar spike after breakfast?",
    "What can I do to avoid blood sugar spikes?",
    "How does exercise affect my glucose levels?",
    "What should I eat when my blood sugar is low?",
];

const TYPE1_GUIDANCE: &[&str] = &[
    "Insulin dosing calculations",
    "Carb-to-insulin ratios",
    "Recognizing and treating hypoglycemia",
    "Adjusting insulin around exercise",
];

const TYPE2_GUIDANCE: &[&str] = &[
    "Medication and meal timing",
    "Weight management strategies",
    "Improving insulin sensitivity",
    "Tracking A1C over time",
];

const PREDIABETES_GUIDANCE: &[&str] = &[
    "Lifestyle changes to prevent progression",
    "Building a sustainable exercise routine",
    "Understanding fasting glucose results",
    "Cutting back on refined sugars",
];

const GENERAL_TIPS: &[&str] = &[
    "Stay hydrated throughout the day",
    "Pair carbohydrates with protein or healthy fats",
    "Keep a consistent meal schedule",
    "Check your blood sugar regularly",
];

pub const GUIDELINES: &[&str] = &[
    "Always personalize advice based on user profile",
    "Ask clarifying questions when needed",
    "Provide evidence-based nutrition recommendations",
    "Recommend consulting healthcare providers for medical decisions",
    "Be supportive and non-judgmental",
];

pub const LOW_GI_FOODS: &[&str] = &[
    "lentils",
    "chickpeas",
    "steel-cut oats",
    "quinoa",
    "non-starchy vegetables",
    "berries",
    "plain Greek yogurt",
    "nuts and seeds",
];

fn entries(category: Category) -> (&'static [&'static str], TemplateKind) {
    match category {
        Category::MealPlanning => (MEAL_PLANNING, TemplateKind::Question),
        Category::CarbCounting => (CARB_COUNTING, TemplateKind::Question),
        Category::BloodSugarManagement => (BLOOD_SUGAR_MANAGEMENT, TemplateKind::Question),
        Category::Type1Guidance => (TYPE1_GUIDANCE, TemplateKind::Topic),
        Category::Type2Guidance => (TYPE2_GUIDANCE, TemplateKind::Topic),
        Category::PrediabetesGuidance => (PREDIABETES_GUIDANCE, TemplateKind::Topic),
        Category::GeneralTips => (GENERAL_TIPS, TemplateKind::Topic),
    }
}

/// Low glycemic index foods the assistant may suggest
pub fn low_gi_foods() -> &'static [&'static str] {
    LOW_GI_FOODS
}

pub(crate) fn builtin_catalog() -> PromptCatalog {
    let templates: HashMap<Category, Vec<PromptTemplate>> = Category::ALL
        .iter()
        .map(|&category| {
            let (texts, kind) = entries(category);
            let list: Vec<PromptTemplate> = texts
                .iter()
                .map(|text| PromptTemplate::new(category, kind, *text))
                .collect();
            (category, list)
        })
        .collect();

    let guidelines: Vec<Guideline> = GUIDELINES.iter().map(|g| Guideline::new(*g)).collect();

    PromptCatalog::from_parts(SYSTEM_PROMPT.to_string(), templates, guidelines)
}
