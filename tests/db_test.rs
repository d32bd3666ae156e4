mod common;

use std::collections::HashSet;

use common::{create_test_pool, seed_category, seed_question};
use trivia_api::db::queries::categories::{get_all_categories, import_categories};
use trivia_api::db::queries::questions::{
    count_questions, get_questions_page, get_quiz_question, import_questions, search_questions,
};
use trivia_api::db::{Category, Question};

#[tokio::test]
async fn pagination_windows_line_up_with_the_count() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Science").await;
    for id in 1..=25 {
        seed_question(&pool, id, &format!("Question {id}?"), "Answer", 1, 1).await;
    }

    assert_eq!(count_questions(&pool).await.unwrap(), 25);

    let page = get_questions_page(&pool, 10, 20).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![21, 22, 23, 24, 25]);

    let past_the_end = get_questions_page(&pool, 10, 30).await.unwrap();
    assert!(past_the_end.is_empty());
}

#[tokio::test]
async fn search_matches_regardless_of_case() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Geography").await;
    seed_question(&pool, 1, "Which country borders America?", "Canada", 1, 1).await;
    seed_question(&pool, 2, "Which country borders France?", "Spain", 1, 1).await;

    let hits = search_questions(&pool, "AMER").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    let misses = search_questions(&pool, "germany").await.unwrap();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn search_case_folding_is_ascii_only() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Geography").await;
    seed_question(&pool, 1, "Which continent is América in?", "South America", 1, 1).await;

    // ASCII letters fold regardless of case
    let hits = search_questions(&pool, "amérICA").await.unwrap();
    assert_eq!(hits.len(), 1);

    // non-ASCII letters do not: É never matches é
    let misses = search_questions(&pool, "AMÉRICA").await.unwrap();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn quiz_candidates_respect_category_and_exclusions() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Science").await;
    seed_category(&pool, 2, "Art").await;
    seed_question(&pool, 1, "Q1?", "A1", 1, 1).await;
    seed_question(&pool, 2, "Q2?", "A2", 1, 1).await;
    seed_question(&pool, 3, "Q3?", "A3", 2, 1).await;

    // category filter
    for _ in 0..10 {
        let question = get_quiz_question(&pool, Some(2), &[]).await.unwrap();
        assert_eq!(question.unwrap().id, 3);
    }

    // exclusion list
    let question = get_quiz_question(&pool, Some(1), &[1]).await.unwrap();
    assert_eq!(question.unwrap().id, 2);

    // all categories, nothing excluded: any of the three may come back
    let question = get_quiz_question(&pool, None, &[]).await.unwrap().unwrap();
    assert!(HashSet::from([1, 2, 3]).contains(&question.id));

    // exhausted pool
    let question = get_quiz_question(&pool, None, &[1, 2, 3]).await.unwrap();
    assert!(question.is_none());
}

#[tokio::test]
async fn import_reconciles_categories_to_the_file() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Science").await;
    seed_category(&pool, 2, "Art").await;

    import_categories(
        &pool,
        vec![
            Category {
                id: 1,
                name: "Natural Science".to_string(),
            },
            Category {
                id: 3,
                name: "History".to_string(),
            },
        ],
    )
    .await
    .unwrap();

    let categories = get_all_categories(&pool).await.unwrap();
    let names: Vec<(i64, String)> = categories.into_iter().map(|c| (c.id, c.name)).collect();
    assert_eq!(
        names,
        vec![
            (1, "Natural Science".to_string()),
            (3, "History".to_string())
        ]
    );
}

#[tokio::test]
async fn import_reconciles_questions_to_the_file() {
    let pool = create_test_pool().await;
    seed_category(&pool, 1, "Science").await;
    seed_question(&pool, 1, "Old?", "Old", 1, 1).await;
    seed_question(&pool, 2, "Gone?", "Gone", 1, 1).await;

    import_questions(
        &pool,
        vec![Question {
            id: 1,
            question: "New?".to_string(),
            answer: "New".to_string(),
            category: 1,
            difficulty: 2,
        }],
    )
    .await
    .unwrap();

    assert_eq!(count_questions(&pool).await.unwrap(), 1);
    let page = get_questions_page(&pool, 10, 0).await.unwrap();
    assert_eq!(page[0].question, "New?");
    assert_eq!(page[0].difficulty, 2);
}
