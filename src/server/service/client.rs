use sea_orm::DatabaseConnection;

use crate::server::{
    data::{client::ClientRepository, service_order::ServiceOrderRepository},
    error::AppError,
    model::client::{Client, SaveClientParams},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists clients, optionally filtered by a search term
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).list(search).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    pub async fn create(&self, params: SaveClientParams) -> Result<Client, AppError> {
        validate(&params)?;

        Ok(ClientRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: SaveClientParams) -> Result<Client, AppError> {
        validate(&params)?;

        ClientRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    /// Deletes a client that has no service orders
    ///
    /// # Returns
    /// - `Ok(())` - Client deleted
    /// - `Err(AppError::NotFound)` - No client with that ID
    /// - `Err(AppError::Conflict)` - Client still has service orders
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClientRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(client_not_found(id));
        }

        let orders = ServiceOrderRepository::new(self.db)
            .count_by_client(id)
            .await?;
        if orders > 0 {
            return Err(AppError::Conflict(format!(
                "Client {} has {} service order(s) and cannot be deleted",
                id, orders
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn client_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Client {} not found", id))
}

fn validate(params: &SaveClientParams) -> Result<(), AppError> {
    let missing = params.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )))
    }
}
