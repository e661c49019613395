//! Wire types for the portal backend API

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Auth

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token issued by the admin login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

// Users

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOut {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub roles: Vec<String>,
}

// Patients

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientOut {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub sex: Option<String>,
    pub contact: Option<String>,
    pub risk_level: Option<String>,
    pub notes: Option<String>,
    pub external_id: Option<String>,
    pub visit_time: Option<NaiveDateTime>,
    pub medical_record_no: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Resources

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceOut {
    pub id: i64,
    pub name: String,
    pub r#type: Option<String>,
    pub department_id: Option<i64>,
    pub status: String,
}

// Schedules

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub resource_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOut {
    pub id: i64,
    pub resource_id: i64,
    pub patient_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
    pub created_by: i64,
}

// Dashboard

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub users: i64,
    pub patients: i64,
    pub resources: i64,
    pub schedules: i64,
    #[serde(default)]
    pub risk_distribution: HashMap<String, i64>,
}

// Screening

/// Risk-factor payload posted to the assessment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessPayload {
    pub age: f64,
    pub bmi: f64,
    pub smoking: bool,
    pub alcohol: bool,
    pub family_history: bool,
    pub symptom_score: f64,
    pub lab_cea: f64,
    pub lab_ca125: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessResponse {
    pub risk_score: f64,
    pub risk_level: String,
    pub top_factors: HashMap<String, f64>,
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
