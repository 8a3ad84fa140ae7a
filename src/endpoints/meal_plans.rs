//! Meal plan operations.

use std::sync::Arc;

use crate::client::http::HttpClient;
use crate::endpoints::{decode_items, map_not_found};
use crate::error::Result;
use crate::models::base::{JsonModel, RequestBody};
use crate::models::meal_plan::{
    MealPlan, MealPlanCreateRequest, MealPlanFilter, MealPlanUpdateRequest,
};

/// Manager for the `groups/mealplans` resource family.
pub struct MealPlansManager {
    http: Arc<dyn HttpClient>,
}

impl MealPlansManager {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        MealPlansManager { http }
    }

    /// List meal plans, optionally bounded to an inclusive date range via
    /// the filter's `start_date`/`end_date`.
    pub async fn get_all(&self, filter: MealPlanFilter) -> Result<Vec<MealPlan>> {
        let response = self
            .http
            .get("groups/mealplans", &filter.to_params())
            .await?;
        decode_items(response)
    }

    /// Fetch one meal plan by id.
    pub async fn get(&self, plan_id: &str) -> Result<MealPlan> {
        let response = self
            .http
            .get(&format!("groups/mealplans/{}", plan_id), &[])
            .await
            .map_err(|e| map_not_found(e, "meal_plan", plan_id))?;
        MealPlan::from_value(response)
    }

    /// Create a meal plan.
    pub async fn create(&self, data: RequestBody<MealPlanCreateRequest>) -> Result<MealPlan> {
        let response = self
            .http
            .post("groups/mealplans", Some(data.into_value()?))
            .await?;
        MealPlan::from_value(response)
    }

    /// Update a meal plan.
    pub async fn update(
        &self,
        plan_id: &str,
        data: RequestBody<MealPlanUpdateRequest>,
    ) -> Result<MealPlan> {
        let response = self
            .http
            .put(
                &format!("groups/mealplans/{}", plan_id),
                Some(data.into_value()?),
            )
            .await
            .map_err(|e| map_not_found(e, "meal_plan", plan_id))?;
        MealPlan::from_value(response)
    }

    /// Delete a meal plan.
    pub async fn delete(&self, plan_id: &str) -> Result<bool> {
        self.http
            .delete(&format!("groups/mealplans/{}", plan_id))
            .await
            .map_err(|e| map_not_found(e, "meal_plan", plan_id))?;
        Ok(true)
    }
}
