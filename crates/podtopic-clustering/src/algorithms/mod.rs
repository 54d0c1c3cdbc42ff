//! Clustering algorithms: normalization, TF-IDF, K-means, silhouette, keywords.

pub mod keywords;
pub mod kmeans;
pub mod normalizer;
pub mod silhouette;
pub mod stop_words;
pub mod term_frequency;
pub mod tfidf;

pub use keywords::top_keywords;
pub use kmeans::{KMeans, KMeansFit};
pub use normalizer::normalize;
pub use silhouette::{silhouette_score, SilhouetteUndefined};
pub use tfidf::{FeatureMatrix, TfIdfVectorizer};
