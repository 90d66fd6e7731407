use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::Candidate};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

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
                            p class="text-gray-600" { "No movies yet." }
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

pub fn edit_page(movie_id: i32) -> String {
    page(
        "Edit Movie",
        html! {
            (card(html! {
                h1 class="text-2xl font-bold text-gray-900" { "Edit Movie Rating" }

                form class="mt-8 space-y-6" method="post" action=(format!("/update/{movie_id}")) {
                    div {
                        label class="block text-sm font-medium text-gray-700" for="new_rating" { "Your Rating Out of 10 e.g. 7.7" }
                        input class=(INPUT_CLASS) name="new_rating" id="new_rating" inputmode="decimal";
                    }

                    div {
                        label class="block text-sm font-medium text-gray-700" for="new_review" { "Your Review" }
                        input class=(INPUT_CLASS) name="new_review" id="new_review";
                    }

                    button class=(BUTTON_CLASS) type="submit" { "Done" }
                }
            }))
        },
    )
}

pub fn add_page() -> String {
    page(
        "Add Movie",
        html! {
            (card(html! {
                h1 class="text-2xl font-bold text-gray-900" { "Add a Movie" }

                form class="mt-8 space-y-6" method="post" action="/add" {
                    div {
                        label class="block text-sm font-medium text-gray-700" for="new_title" { "Movie Title" }
                        input class=(INPUT_CLASS) name="new_title" id="new_title" required;
                    }

                    button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
                }
            }))
        },
    )
}

pub fn select_page(candidates: &[Candidate]) -> String {
    page(
        "Select Movie",
        html! {
            (card(html! {
                h1 class="text-2xl font-bold text-gray-900" { "Select Movie" }

                @if candidates.is_empty() {
                    p class="mt-4 text-gray-600" { "No matching movies found." }
                } @else {
                    ul class="mt-6 divide-y divide-gray-200" {
                        @for candidate in candidates {
                            li class="py-3" {
                                a class="text-blue-600 hover:text-blue-800" href=(format!("/select/{}", candidate.id)) {
                                    (candidate.title.as_deref().unwrap_or("Untitled"))
                                    @if let Some(date) = candidate.release_date.as_deref().filter(|d| !d.is_empty()) {
                                        span class="ml-2 text-gray-500" { "- " (date) }
                                    }
                                }
                            }
                        }
                    }
                }

                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
            }))
        },
    )
}

pub fn error_page(status: StatusCode, message: String) -> String {
    page(
        "Error",
        html! {
            (card(html! {
                h1 class="text-2xl font-bold text-gray-900" {
                    "Error " (status.as_u16())
                    @if let Some(reason) = status.canonical_reason() {
                        span class="ml-2 font-normal text-gray-500" { (reason) }
                    }
                }
                p class="mt-4 text-gray-700" { (message) }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
            }))
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

fn card(inner: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-50 flex items-center justify-center" {
            div class="max-w-xl w-full px-6" {
                div class="bg-white shadow rounded-lg p-8" { (inner) }
            }
        }
    }
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 rounded" src=(movie.img_url) alt=(movie.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="mr-2 text-gray-400" { "#" (movie.ranking) }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-bold text-yellow-600" { (format!("{:.1}", movie.rating)) }
                }
                p class="mt-2 text-sm italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/update/{}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}
