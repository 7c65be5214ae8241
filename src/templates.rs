use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::CatalogCandidate};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page() -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a Movie" }
                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[CatalogCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                        p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }

                        @if candidates.is_empty() {
                            p class="mt-8 text-gray-600" { "Nothing matched that title." }
                        } @else {
                            ul class="mt-8 divide-y divide-gray-200" {
                                @for candidate in candidates {
                                    li class="py-3" {
                                        a class="text-blue-600 hover:text-blue-800" href=(format!("/add_record?id={}", candidate.id)) {
                                            (candidate.title) " - " (candidate.release_label())
                                        }
                                    }
                                }
                            }
                        }
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, error: Option<&str>) -> String {
    page(
        "Edit Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        div class="flex items-start gap-6" {
                            img class="w-24 rounded" src=(movie.img_url) alt=(movie.title);
                            div {
                                h1 class="text-2xl font-bold text-gray-900" {
                                    (movie.title)
                                    span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                                }
                                p class="mt-2 text-gray-600" { "Rate this movie and say what you thought." }
                            }
                        }

                        @if let Some(error) = error {
                            p class="mt-6 rounded-md bg-red-50 px-4 py-2 text-sm text-red-700" { (error) }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/update?id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_rating" { "Your Rating Out of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="new_rating" id="new_rating" value=(movie.rating.map(|r| r.to_string()).unwrap_or_default()) required;
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_review" { "Your Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="new_review" id="new_review" value=(movie.review.as_deref().unwrap_or_default()) required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error " (status.as_u16()) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-28 rounded" src=(movie.img_url) alt=(movie.title);
            div class="flex-1" {
                h2 class="text-xl font-semibold text-gray-900" {
                    (movie.title)
                    span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                }
                p class="mt-2 text-gray-700" { (movie.description) }

                div class="mt-4 border-l-4 border-blue-500 pl-4" {
                    @match movie.rating {
                        Some(rating) => { p class="font-medium text-gray-900" { (format!("{rating} / 10")) } },
                        None => { p class="text-gray-500" { "Not rated yet" } },
                    }
                    @if let Some(review) = &movie.review {
                        p class="mt-1 text-sm text-gray-600" { "\u{201c}" (review) "\u{201d}" }
                    }
                }

                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/update?id={}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rating: Option<f64>, review: Option<&str>) -> movie::Model {
        movie::Model {
            id: 7,
            title: "Up".to_string(),
            year: 2009,
            description: "Balloons & a house.".to_string(),
            rating,
            ranking: None,
            review: review.map(str::to_string),
            img_url: "https://image.tmdb.org/t/p/w500/up.jpg".to_string(),
        }
    }

    #[test]
    fn unrated_movie_says_so() {
        let html = index_page(&[movie(None, None)]);
        assert!(html.contains("Not rated yet"));
        assert!(html.contains("/update?id=7"));
        assert!(html.contains("/delete?id=7"));
        assert!(html.contains("Balloons &amp; a house."));
    }

    #[test]
    fn rated_movie_shows_rating_and_review() {
        let html = index_page(&[movie(Some(8.5), Some("Great"))]);
        assert!(html.contains("8.5 / 10"));
        assert!(html.contains("Great"));
        assert!(!html.contains("Not rated yet"));
    }

    #[test]
    fn candidates_link_to_add_record() {
        let candidates = vec![CatalogCandidate {
            id: 14160,
            title: "Up".to_string(),
            release_date: Some("2009-05-28".to_string()),
        }];
        let html = select_page("Up", &candidates);
        assert!(html.contains("/add_record?id=14160"));
        assert!(html.contains("Up - 2009-05-28"));
    }

    #[test]
    fn edit_page_posts_back_to_update() {
        let html = edit_page(&movie(None, None), Some("a review is required"));
        assert!(html.contains("action=\"/update?id=7\""));
        assert!(html.contains("a review is required"));
    }
}
