use kitchen_core::NewRecipe;

use super::{RecipeRepository, RepoError};

fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            title: "Spaghetti Carbonara".to_string(),
            description: "A classic Italian pasta dish with eggs, cheese, pancetta, and pepper."
                .to_string(),
            ingredients: ["Spaghetti", "Eggs", "Pancetta", "Parmesan Cheese", "Black Pepper"]
                .map(String::from)
                .to_vec(),
            directions: [
                "Cook spaghetti",
                "Fry pancetta",
                "Mix eggs and cheese",
                "Combine all ingredients",
            ]
            .map(String::from)
            .to_vec(),
            image: None,
            is_public: true,
        },
        NewRecipe {
            title: "Chicken Curry".to_string(),
            description: "A flavorful curry dish with tender chicken and aromatic spices."
                .to_string(),
            ingredients: ["Chicken", "Onions", "Tomatoes", "Garlic", "Ginger", "Spices"]
                .map(String::from)
                .to_vec(),
            directions: [
                "Sauté onions and garlic",
                "Add chicken",
                "Pour in tomatoes and spices",
                "Simmer until cooked",
            ]
            .map(String::from)
            .to_vec(),
            image: None,
            is_public: true,
        },
    ]
}

/// Insert the sample recipes if the store is empty. Returns how many were added.
pub async fn seed_sample_recipes(repo: &dyn RecipeRepository) -> Result<usize, RepoError> {
    if !repo.get_all().await?.is_empty() {
        return Ok(0);
    }

    let samples = sample_recipes();
    let count = samples.len();
    for recipe in samples {
        repo.add(recipe, None).await?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRecipeRepository;

    #[tokio::test]
    async fn test_seeds_only_empty_store() {
        let repo = InMemoryRecipeRepository::new();
        assert_eq!(seed_sample_recipes(&repo).await.unwrap(), 2);
        assert_eq!(seed_sample_recipes(&repo).await.unwrap(), 0);

        let titles: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Spaghetti Carbonara", "Chicken Curry"]);
    }
}
