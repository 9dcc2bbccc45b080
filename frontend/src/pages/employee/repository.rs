use std::rc::Rc;

use crate::api::ApiClient;

pub struct EmployeeRepository {
    client: Rc<ApiClient>,
}

impl EmployeeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
