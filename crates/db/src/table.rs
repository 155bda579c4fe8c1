use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Title,
    Text,
    CookingTime,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    Id,
    RecipeId,
    IngredientId,
    Amount,
    Position,
}

#[derive(Iden, Clone)]
pub enum ShoppingCart {
    Table,
    Id,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Tag {
    Table,
    Id,
    Name,
    Color,
    Slug,
}

#[derive(Iden, Clone)]
pub enum RecipeTag {
    Table,
    Id,
    RecipeId,
    TagId,
}
