use async_trait::async_trait;
use kitchen_core::{NewRecipe, Recipe, RecipeUpdate};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{parse_id, RecipeRepository, RepoError};

/// Process-local recipe store. Keeps insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn get_all(&self) -> Result<Vec<Recipe>, RepoError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn get_public(&self) -> Result<Vec<Recipe>, RepoError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().filter(|r| r.is_public).cloned().collect())
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> Result<Vec<Recipe>, RepoError> {
        let owner = owner_id.to_string();
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.owner_id.as_deref() == Some(owner.as_str()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RepoError> {
        let key = parse_id(id)?.to_string();
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().find(|r| r.id == key).cloned())
    }

    async fn add(&self, recipe: NewRecipe, owner_id: Option<Uuid>) -> Result<Recipe, RepoError> {
        let mut recipe = recipe.into_recipe(Uuid::new_v4().to_string());
        recipe.owner_id = owner_id.map(|id| id.to_string());
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, RepoError> {
        let key = parse_id(id)?.to_string();
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == key)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        recipe.apply(update);
        Ok(recipe.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError> {
        let key = parse_id(id)?.to_string();
        self.recipes.write().await.retain(|r| r.id != key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn new_recipe(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: "Test recipe".to_string(),
            ingredients: vec!["Spaghetti".to_string(), "Eggs".to_string()],
            directions: vec!["Cook spaghetti".to_string(), "Serve".to_string()],
            image: None,
            is_public: false,
        }
    }

    fn update_for(recipe: &Recipe, title: &str) -> RecipeUpdate {
        RecipeUpdate {
            id: recipe.id.clone(),
            title: title.to_string(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            directions: recipe.directions.clone(),
            image: None,
            is_public: true,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_distinct_ids() {
        let repo = InMemoryRecipeRepository::new();
        let first = repo.add(new_recipe("First"), None).await.unwrap();
        let second = repo.add(new_recipe("Second"), None).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(repo.get_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRecipeRepository::new();
        let first = repo.add(new_recipe("First"), None).await.unwrap();
        let second = repo.add(new_recipe("Second"), None).await.unwrap();
        repo.delete_by_id(&first.id).await.unwrap();

        let third = repo.add(new_recipe("Third"), None).await.unwrap();
        assert_ne!(third.id, first.id);
        assert_ne!(third.id, second.id);
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_unique_ids() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let mut tasks = JoinSet::new();
        for i in 0..50 {
            let repo = repo.clone();
            tasks.spawn(async move {
                repo.add(new_recipe(&format!("Recipe {}", i)), None)
                    .await
            });
        }

        let mut ids = HashSet::new();
        while let Some(result) = tasks.join_next().await {
            let recipe = result.unwrap().unwrap();
            assert!(ids.insert(recipe.id));
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(repo.get_all().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_get_by_owner() {
        let repo = InMemoryRecipeRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let first = repo.add(new_recipe("First"), Some(alice)).await.unwrap();
        repo.add(new_recipe("Second"), Some(bob)).await.unwrap();
        repo.add(new_recipe("Anonymous"), None).await.unwrap();
        let third = repo.add(new_recipe("Third"), Some(alice)).await.unwrap();

        assert_eq!(first.owner_id, Some(alice.to_string()));
        assert_eq!(repo.get_by_owner(alice).await.unwrap(), vec![first, third]);
        assert!(repo.get_by_owner(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add(new_recipe("Carbonara"), None).await.unwrap();

        let found = repo.find_by_id(&added.id).await.unwrap().unwrap();
        assert_eq!(found.ingredients, vec!["Spaghetti", "Eggs"]);
        assert_eq!(found.directions, vec!["Cook spaghetti", "Serve"]);

        let missing = Uuid::new_v4().to_string();
        assert!(repo.find_by_id(&missing).await.unwrap().is_none());
        assert!(matches!(
            repo.find_by_id("not-an-id").await,
            Err(RepoError::MalformattedId(_))
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add(new_recipe("Carbonara"), None).await.unwrap();

        let updated = repo
            .update(&added.id, update_for(&added, "Spaghetti alla Carbonara"))
            .await
            .unwrap();
        assert_eq!(updated.id, added.id);
        assert_eq!(updated.title, "Spaghetti alla Carbonara");
        assert!(updated.is_public);
        assert_eq!(repo.get_public().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_recipe() {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add(new_recipe("Carbonara"), None).await.unwrap();
        let missing = Uuid::new_v4().to_string();

        let result = repo.update(&missing, update_for(&added, "Other")).await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));
        assert_eq!(repo.get_all().await.unwrap(), vec![added]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add(new_recipe("Carbonara"), None).await.unwrap();

        repo.delete_by_id(&added.id).await.unwrap();
        repo.delete_by_id(&added.id).await.unwrap();
        repo.delete_by_id(&Uuid::new_v4().to_string()).await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
