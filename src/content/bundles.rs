//! Per-page content bundle schemas.
//!
//! Each page owns its own bundle shape; shapes are not interchangeable
//! across pages. Bundles are deserialized once at startup from the JSON
//! documents under the content directory and never mutated afterwards.
//!
//! Optional fields (e.g. home-page reviews, gallery images) model
//! sections a translation may legitimately leave out. A missing
//! optional field renders as an empty state, it never triggers
//! language fallback.

use serde::{Deserialize, Serialize};

// ==================== Home ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub page1: HomeHero,
    pub page2: HomePartners,
    pub page3: HomeServices,
    pub page4: HomeReviews,
    pub page5: HomeGallery,
    pub page6: HomeSignup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHero {
    pub title: String,
    pub subtitle: String,
    pub explore_button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePartners {
    pub title: String,
    pub trusted_partners: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeServices {
    pub title: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub content: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeReviews {
    pub title: String,
    pub reviews: Option<Vec<Review>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeGallery {
    pub title: String,
    pub images: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSignup {
    pub title: String,
    pub sign_up_button: String,
}

// ==================== About ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    pub values: Vec<ValueCard>,
    pub story: Story,
    pub mission: Mission,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub slogan: String,
}

// ==================== Blog ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogContent {
    pub title: String,
    pub subtitle: String,
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub content: String,
    pub image: String,
    pub link: String,
}

// ==================== FAQs ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqsContent {
    pub title: String,
    pub subtitle: String,
    pub faqs: Vec<FaqEntry>,
}

/// One question/answer/link triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub link: String,
}

// ==================== Movies ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviesContent {
    pub title: String,
    pub subtitle: String,
}

// ==================== Festivals ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalsContent {
    pub title: String,
    pub subtitle: String,
    pub how_to_use: HowToUse,
    pub question_types: QuestionTypes,
    pub inquiry_form: InquiryForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowToUse {
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionTypes {
    pub title: String,
    pub examples: Vec<QuestionExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionExample {
    pub question: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub title: String,
    pub input_label: String,
    pub submit_button: String,
}

// ==================== Submit ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitContent {
    pub title: String,
    pub subtitle: String,
    pub form: SubmitForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitForm {
    pub title: String,
    pub festival_name_label: String,
    pub description_label: String,
    pub location_label: String,
    pub start_date_label: String,
    pub end_date_label: String,
    pub contact_email_label: String,
    pub submit_button: String,
}

// ==================== Manage ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageContent {
    pub title: String,
    pub subtitle: String,
    pub form: ManageForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageForm {
    pub title: String,
    pub festival_name_label: String,
    pub date_label: String,
    pub notification_label: String,
    pub notification_options: Vec<NotificationOption>,
    pub submit_button: String,
    pub confirmation_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationOption {
    pub value: String,
    pub label: String,
}
