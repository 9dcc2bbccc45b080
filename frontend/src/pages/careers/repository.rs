use std::rc::Rc;

use crate::api::{ApiClient, ApiError, ApplicationPayload, ApplyResponse};

pub struct CareersRepository {
    client: Rc<ApiClient>,
}

impl CareersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, payload: &ApplicationPayload) -> Result<ApplyResponse, ApiError> {
        self.client.submit_application(payload).await
    }
}
