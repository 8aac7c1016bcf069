#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todomaster::db::tasks::Tasks;
    use todomaster::libs::clock::FixedClock;
    use todomaster::libs::error::TodoError;
    use todomaster::libs::service::{AddTask, Completion, EditTask, ListOptions, TaskService};
    use todomaster::libs::task::{Priority, Task};

    struct ServiceTestContext {
        service: TaskService<FixedClock>,
        _temp_dir: TempDir,
    }

    impl TestContext for ServiceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("tasks.db")).unwrap();
            ServiceTestContext {
                service: TaskService::with_clock(tasks, FixedClock(now())),
                _temp_dir: temp_dir,
            }
        }
    }

    /// Sunday 2026-01-11, 09:00.
    fn now() -> NaiveDateTime {
        at(11, 9, 0, 0)
    }

    fn at(day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, min, sec).unwrap()
    }

    fn add(service: &mut TaskService<FixedClock>, description: &str, priority: &str, due: Option<&str>) -> Task {
        service
            .add(AddTask {
                description: description.to_string(),
                priority: Some(priority.to_string()),
                due: due.map(str::to_string),
                tags: Vec::new(),
            })
            .unwrap()
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_add_normalizes_input(ctx: &mut ServiceTestContext) {
        let task = ctx
            .service
            .add(AddTask {
                description: "  Buy   milk \n and bread ".to_string(),
                priority: Some("H".to_string()),
                due: Some("tomorrow".to_string()),
                tags: vec!["Home, errands".to_string(), "home;shop".to_string()],
            })
            .unwrap();

        assert_eq!(task.description, "Buy milk and bread");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, Some(at(12, 23, 59, 59)));
        assert_eq!(task.tags, vec!["home", "errands", "shop"]);
        assert_eq!(task.created_at, now());
        assert_eq!(task.updated_at, now());
        assert_eq!(ctx.service.get(task.id).unwrap(), task);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_add_defaults(ctx: &mut ServiceTestContext) {
        let task = ctx
            .service
            .add(AddTask {
                description: "Read a book".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert!(task.tags.is_empty());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_add_assigns_unique_ids(ctx: &mut ServiceTestContext) {
        let first = add(&mut ctx.service, "First", "low", None);
        let second = add(&mut ctx.service, "Second", "low", None);
        assert_ne!(first.id, second.id);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_invalid_input_writes_nothing(ctx: &mut ServiceTestContext) {
        let empty = ctx.service.add(AddTask {
            description: " \t ".to_string(),
            ..Default::default()
        });
        assert!(matches!(empty, Err(TodoError::Validation { field: "description", .. })));

        let bad_priority = ctx.service.add(AddTask {
            description: "Valid".to_string(),
            priority: Some("urgent".to_string()),
            ..Default::default()
        });
        assert!(matches!(bad_priority, Err(TodoError::Validation { field: "priority", .. })));

        let bad_date = ctx.service.add(AddTask {
            description: "Valid".to_string(),
            due: Some("someday".to_string()),
            ..Default::default()
        });
        assert!(matches!(bad_date, Err(TodoError::DateParse { .. })));

        let all = ListOptions {
            all: true,
            ..Default::default()
        };
        assert!(ctx.service.list(&all).unwrap().is_empty());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_complete_task(ctx: &mut ServiceTestContext) {
        let task = add(&mut ctx.service, "Finish report", "high", None);

        let completion = ctx.service.complete(task.id).unwrap();
        assert!(matches!(completion, Completion::Completed(_)));
        assert!(completion.task().completed);
        assert_eq!(completion.task().completed_at, Some(now()));

        let all = ListOptions {
            all: true,
            ..Default::default()
        };
        let listed = ctx.service.list(&all).unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].completed);
        assert!(listed[0].completed_at.is_some());
        assert!(ctx.service.list(&ListOptions::default()).unwrap().is_empty());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_complete_twice_is_noop(ctx: &mut ServiceTestContext) {
        let task = add(&mut ctx.service, "Once", "low", None);
        let first = ctx.service.complete(task.id).unwrap();
        let second = ctx.service.complete(task.id).unwrap();

        assert!(matches!(second, Completion::AlreadyCompleted(_)));
        assert_eq!(second.task(), first.task());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_complete_missing_task(ctx: &mut ServiceTestContext) {
        assert!(matches!(ctx.service.complete(99), Err(TodoError::NotFound(99))));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_edit_due_date(ctx: &mut ServiceTestContext) {
        let task = add(&mut ctx.service, "Dentist", "medium", Some("2026-01-20"));

        let renamed = ctx
            .service
            .edit(
                task.id,
                EditTask {
                    description: Some("Dentist appointment".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(renamed.due_date, Some(at(20, 23, 59, 59)));

        let moved = ctx
            .service
            .edit(
                task.id,
                EditTask {
                    due: Some("2026-01-22 14:30".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.due_date, Some(at(22, 14, 30, 0)));

        let cleared = ctx
            .service
            .edit(
                task.id,
                EditTask {
                    due: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.due_date, None);
        assert_eq!(cleared.description, "Dentist appointment");
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_edit_tags_and_reopen(ctx: &mut ServiceTestContext) {
        let task = ctx
            .service
            .add(AddTask {
                description: "Garden".to_string(),
                tags: vec!["home".to_string(), "outside".to_string()],
                ..Default::default()
            })
            .unwrap();
        ctx.service.complete(task.id).unwrap();

        let edited = ctx
            .service
            .edit(
                task.id,
                EditTask {
                    add_tags: vec!["Spring".to_string()],
                    remove_tags: vec!["outside".to_string()],
                    reopen: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(edited.tags, vec!["home", "spring"]);
        assert!(!edited.completed);
        assert_eq!(edited.completed_at, None);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_edit_rejects_invalid_input(ctx: &mut ServiceTestContext) {
        let task = add(&mut ctx.service, "Original", "low", None);

        let nothing = ctx.service.edit(task.id, EditTask::default());
        assert!(matches!(nothing, Err(TodoError::Validation { .. })));

        let bad = ctx.service.edit(
            task.id,
            EditTask {
                description: Some("Changed".to_string()),
                due: Some("13/01/2026".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(bad, Err(TodoError::DateParse { .. })));
        assert_eq!(ctx.service.get(task.id).unwrap(), task);

        let missing = ctx.service.edit(
            404,
            EditTask {
                priority: Some("high".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(missing, Err(TodoError::NotFound(404))));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_delete_and_clear(ctx: &mut ServiceTestContext) {
        let keep = add(&mut ctx.service, "Keep", "low", None);
        let gone = add(&mut ctx.service, "Gone", "low", None);
        let done = add(&mut ctx.service, "Done", "low", None);
        ctx.service.complete(done.id).unwrap();

        ctx.service.delete(gone.id).unwrap();
        assert!(matches!(ctx.service.get(gone.id), Err(TodoError::NotFound(_))));
        assert!(matches!(ctx.service.delete(gone.id), Err(TodoError::NotFound(_))));

        assert_eq!(ctx.service.clear().unwrap(), 1);
        assert_eq!(ctx.service.clear().unwrap(), 0);

        let all = ListOptions {
            all: true,
            ..Default::default()
        };
        assert_eq!(ids(&ctx.service.list(&all).unwrap()), vec![keep.id]);

        let next = add(&mut ctx.service, "Next", "low", None);
        assert!(next.id > done.id);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_list_by_priority(ctx: &mut ServiceTestContext) {
        let high_later = add(&mut ctx.service, "High later", "high", Some("+5d"));
        add(&mut ctx.service, "Low", "low", Some("tomorrow"));
        let high_undated = add(&mut ctx.service, "High undated", "high", None);
        let high_soon = add(&mut ctx.service, "High soon", "high", Some("tomorrow"));
        add(&mut ctx.service, "Medium", "medium", None);

        let options = ListOptions {
            priority: Some("high".to_string()),
            ..Default::default()
        };
        let listed = ctx.service.list(&options).unwrap();
        assert_eq!(ids(&listed), vec![high_soon.id, high_later.id, high_undated.id]);
        assert!(listed.iter().all(|t| t.priority == Priority::High));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_list_filters(ctx: &mut ServiceTestContext) {
        let overdue = add(&mut ctx.service, "Overdue", "medium", Some("yesterday"));
        let tagged = ctx
            .service
            .add(AddTask {
                description: "Tagged".to_string(),
                tags: vec!["work".to_string()],
                ..Default::default()
            })
            .unwrap();
        let done = add(&mut ctx.service, "Done", "medium", Some("yesterday"));
        ctx.service.complete(done.id).unwrap();

        let by_tag = ListOptions {
            tag: Some("WORK".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&ctx.service.list(&by_tag).unwrap()), vec![tagged.id]);

        let only_overdue = ListOptions {
            overdue: true,
            ..Default::default()
        };
        assert_eq!(ids(&ctx.service.list(&only_overdue).unwrap()), vec![overdue.id]);

        let pending = ListOptions {
            pending: true,
            ..Default::default()
        };
        assert_eq!(ctx.service.list(&pending).unwrap().len(), 2);

        let bad = ListOptions {
            priority: Some("critical".to_string()),
            ..Default::default()
        };
        assert!(matches!(ctx.service.list(&bad), Err(TodoError::Validation { .. })));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_today_boundaries(ctx: &mut ServiceTestContext) {
        let overdue = add(&mut ctx.service, "Overdue", "low", Some("yesterday"));
        let end_of_day = add(&mut ctx.service, "End of day", "low", Some("2026-01-11 23:59:59"));
        let this_evening = add(&mut ctx.service, "This evening", "low", Some("2026-01-11 18:00"));
        add(&mut ctx.service, "Next day", "low", Some("2026-01-12 00:00"));
        add(&mut ctx.service, "Undated", "low", None);
        let done = add(&mut ctx.service, "Done today", "low", Some("today"));
        ctx.service.complete(done.id).unwrap();

        let today = ctx.service.today().unwrap();
        assert_eq!(ids(&today), vec![overdue.id, this_evening.id, end_of_day.id]);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_upcoming_window(ctx: &mut ServiceTestContext) {
        add(&mut ctx.service, "Past", "low", Some("yesterday"));
        let soon = add(&mut ctx.service, "Soon", "low", Some("+3d"));
        let edge = add(&mut ctx.service, "Edge", "low", Some("+7d"));
        add(&mut ctx.service, "Far", "low", Some("+8d"));
        add(&mut ctx.service, "Undated", "low", None);

        assert_eq!(ids(&ctx.service.upcoming().unwrap()), vec![soon.id, edge.id]);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_search(ctx: &mut ServiceTestContext) {
        let milk = add(&mut ctx.service, "Buy MILK", "low", None);
        let tagged = ctx
            .service
            .add(AddTask {
                description: "Weekly shop".to_string(),
                tags: vec!["groceries".to_string()],
                ..Default::default()
            })
            .unwrap();
        add(&mut ctx.service, "Fix bike", "low", None);
        ctx.service.complete(milk.id).unwrap();

        assert_eq!(ids(&ctx.service.search("milk").unwrap()), vec![milk.id]);
        assert_eq!(ids(&ctx.service.search("Grocer").unwrap()), vec![tagged.id]);
        assert!(ctx.service.search("nothing here").unwrap().is_empty());
        assert!(matches!(ctx.service.search("  "), Err(TodoError::Validation { .. })));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_stats(ctx: &mut ServiceTestContext) {
        add(&mut ctx.service, "Overdue", "high", Some("yesterday"));
        add(&mut ctx.service, "Due today", "high", Some("today"));
        add(&mut ctx.service, "Later", "medium", Some("+3d"));
        let done = add(&mut ctx.service, "Done", "low", Some("yesterday"));
        ctx.service.complete(done.id).unwrap();

        let stats = ctx.service.stats().unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.due_today, 1);
        assert_eq!(
            stats.by_priority,
            vec![(Priority::High, 2), (Priority::Medium, 1), (Priority::Low, 0)]
        );
    }
}
