use mockall::mock;

use cinelog::domain::entities::{Director, Genre, Movie, MovieRating, MovieWithStats};
use cinelog::domain::repositories::{
    DirectorRepository, GenreRepository, MovieFieldChanges, MovieListFilter, MovieRepository,
    NewMovieRecord, RatingRepository,
};
use cinelog::shared::errors::AppResult;

mock! {
    pub MovieRepo {}

    #[async_trait::async_trait]
    impl MovieRepository for MovieRepo {
        async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>>;
        async fn list_with_stats(
            &self,
            filter: MovieListFilter,
        ) -> AppResult<(Vec<MovieWithStats>, i64)>;
        async fn find_with_stats(&self, movie_id: i32) -> AppResult<Option<MovieWithStats>>;
        async fn create(&self, record: NewMovieRecord) -> AppResult<Movie>;
        async fn update_fields(&self, movie_id: i32, changes: MovieFieldChanges) -> AppResult<()>;
        async fn replace_genres(&self, movie_id: i32, genre_ids: Vec<i32>) -> AppResult<()>;
        async fn delete(&self, movie_id: i32) -> AppResult<()>;
    }
}

mock! {
    pub DirectorRepo {}

    #[async_trait::async_trait]
    impl DirectorRepository for DirectorRepo {
        async fn find_by_id(&self, director_id: i32) -> AppResult<Option<Director>>;
    }
}

mock! {
    pub GenreRepo {}

    #[async_trait::async_trait]
    impl GenreRepository for GenreRepo {
        async fn find_by_ids(&self, genre_ids: Vec<i32>) -> AppResult<Vec<Genre>>;
    }
}

mock! {
    pub RatingRepo {}

    #[async_trait::async_trait]
    impl RatingRepository for RatingRepo {
        async fn create(&self, movie_id: i32, score: i32) -> AppResult<MovieRating>;
    }
}

pub fn director(id: i32) -> Director {
    Director {
        id,
        name: format!("Director {}", id),
        birth_year: Some(1950),
        description: Some("Prolific".into()),
    }
}

pub fn genre(id: i32, name: &str) -> Genre {
    Genre {
        id,
        name: name.into(),
    }
}

pub fn movie(id: i32, title: &str, release_year: i32, genres: Vec<Genre>) -> Movie {
    Movie {
        id,
        title: title.into(),
        release_year,
        cast: None,
        description: None,
        director: director(1),
        genres,
    }
}

pub fn with_stats(movie: Movie, average_rating: Option<f64>, ratings_count: i64) -> MovieWithStats {
    MovieWithStats {
        movie,
        average_rating,
        ratings_count,
    }
}
