use pretty_assertions::assert_eq;
use sql_go_mapper_core::{generate, generate_files, Error, GenerationConfig, RawColumn};

fn prefixed() -> GenerationConfig {
	GenerationConfig {
		prefix: Some("t_".to_owned()),
		..Default::default()
	}
}

fn order_rows() -> Vec<RawColumn> {
	vec![
		RawColumn::new("t_order", "user_name", "varchar"),
		RawColumn::new("t_order", "id", "bigint"),
	]
}

const ORDER: &str = r#"package model

type OrderPO struct {
	UserName string `orm:"user_name"`
	Id int64 `orm:"id"`
}

type Order struct {
	UserName string
	Id int64
}

func ToOrder(po *OrderPO) *Order {
	if po == nil {
		return nil
	}

	return &Order{
		UserName: po.UserName,
		Id: po.Id,
	}
}

func (entity *Order) ToOrderPO() *OrderPO {
	return &OrderPO{
		UserName: entity.UserName,
		Id: entity.Id,
	}
}

type OrderMySQLRepository struct {
	*common.BaseMySQLRepository
}

func NewOrderMySQLRepository() *OrderMySQLRepository {
	return &OrderMySQLRepository{
		common.NewBaseMySQLRepository(),
	}
}

func (repo *OrderMySQLRepository) GetOrder(ctx context.Context, id int64) (po *OrderPO, err error) {
	po = new(OrderPO)
	query := "SELECT * FROM `t_order` WHERE `id` = ?"
	err = repo.Slave(ctx).GetContext(ctx, po, query, id)
	if err == sql.ErrNoRows {
		return nil, nil
	}
	if err != nil {
		return nil, errors.WithStack(err)
	}
	return
}

func (repo *OrderMySQLRepository) GetOrders(ctx context.Context, id int64) (pos []*OrderPO, err error) {
	pos = []*OrderPO{}
	query := "SELECT * FROM `t_order` WHERE `id` = ?"
	err = repo.Slave(ctx).SelectContext(ctx, &pos, query, id)
	if err == sql.ErrNoRows {
		return pos, nil
	}
	if err != nil {
		return nil, errors.WithStack(err)
	}
	return
}

func (repo *OrderMySQLRepository) CreateOrder(ctx context.Context, po *OrderPO) error {
	query := "INSERT INTO `t_order` SET `user_name` = :user_name"
	ret, err := repo.Master().NamedExecContext(ctx, query, po)
	if err != nil {
		return errors.WithStack(err)
	}
	id, err := ret.LastInsertId()
	if err != nil {
		return errors.WithStack(err)
	}
	po.Id = id
	return nil
}

func (repo *OrderMySQLRepository) UpdateOrder(ctx context.Context, po *OrderPO) (updateSuccess bool, err error) {
	query := "UPDATE `t_order` SET `user_name` = :user_name WHERE `id` = :id"
	ret, err := repo.Master().NamedExecContext(ctx, query, po)
	if err != nil {
		return false, errors.WithStack(err)
	}
	affectedCount, err := ret.RowsAffected()
	if err != nil {
		return false, errors.Wrap(err, "get RowsAffected failed")
	}
	return affectedCount > 0, nil
}

"#;

#[test]
fn order_table_end_to_end() {
	let source = generate(&order_rows(), &prefixed()).unwrap();
	assert_eq!(source, ORDER);
}

#[test]
fn insert_clause_omits_id() {
	let source = generate(&order_rows(), &prefixed()).unwrap();
	assert!(source.contains("SET `user_name` = :user_name\""));
	let insert = source
		.lines()
		.find(|l| l.contains("INSERT INTO"))
		.unwrap();
	assert!(!insert.contains(":id"));
	let update = source.lines().find(|l| l.contains("UPDATE `")).unwrap();
	assert!(update.ends_with("WHERE `id` = :id\""));
}

#[test]
fn same_input_same_output() {
	let rows = vec![
		RawColumn::new("t_b", "id", "int"),
		RawColumn::new("t_b", "name", "varchar"),
		RawColumn::new("t_a", "id", "int"),
		RawColumn::new("t_a", "at", "datetime"),
	];
	let first = generate(&rows, &prefixed()).unwrap();
	let second = generate(&rows, &prefixed()).unwrap();
	assert_eq!(first, second);
	// tables keep the order of the rows
	assert!(first.find("type BPO struct").unwrap() < first.find("type APO struct").unwrap());
}

#[test]
fn fields_follow_row_order() {
	let rows = vec![
		RawColumn::new("t_user", "zeta", "int"),
		RawColumn::new("t_user", "alpha", "int"),
		RawColumn::new("t_user", "mid", "int"),
	];
	let source = generate(&rows, &prefixed()).unwrap();
	let start = source.find("type UserPO struct {").unwrap();
	let end = start + source[start..].find('}').unwrap();
	let fields: Vec<_> = source[start..end]
		.lines()
		.skip(1)
		.map(|l| l.trim().split(' ').next().unwrap())
		.collect();
	assert_eq!(fields, ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn types_come_before_repositories() {
	let rows = vec![
		RawColumn::new("t_a", "id", "int"),
		RawColumn::new("t_b", "id", "int"),
	];
	let source = generate(&rows, &prefixed()).unwrap();
	assert!(source.find("func (entity *B) ToBPO()").unwrap() < source.find("type AMySQLRepository").unwrap());
}

#[test]
fn uppercase_source_names_skip_the_tag() {
	let config = GenerationConfig {
		suppress_tag_if_uppercase: true,
		..prefixed()
	};
	let rows = vec![
		RawColumn::new("t_user", "Nick", "varchar"),
		RawColumn::new("t_user", "email", "varchar"),
	];
	let source = generate(&rows, &config).unwrap();
	assert!(source.contains("\tNick string `orm:\"-\"`\n"));
	assert!(source.contains("\tEmail string `orm:\"email\"`\n"));

	let with_json = GenerationConfig {
		enable_json_tag: true,
		..config
	};
	let rows = vec![
		RawColumn::new("t_user", "Nick", "varchar"),
		RawColumn::new("t_user", "_Alias", "varchar"),
	];
	let source = generate(&rows, &with_json).unwrap();
	assert!(source.contains("\tNick string `orm:\"-\" json:\"Nick\"`\n"));
	assert!(source.contains("\tAlias string `orm:\"-\" json:\"_Alias\"`\n"));
}

#[test]
fn timestamps_import_time() {
	let rows = vec![RawColumn::new("t_user", "created_at", "timestamp")];
	let source = generate(&rows, &prefixed()).unwrap();
	assert!(source.contains("\tCreatedAt time.Time `orm:\"created_at\"`\n"));
	assert!(source.starts_with("package model\n\nimport \"time\"\n\ntype UserPO struct {"));

	let as_string = GenerationConfig {
		date_to_time_disabled: true,
		..prefixed()
	};
	let source = generate(&rows, &as_string).unwrap();
	assert!(source.contains("\tCreatedAt string `orm:\"created_at\"`\n"));
	assert!(!source.contains("import"));
	assert!(source.starts_with("package model\n\ntype UserPO struct {"));
}

#[test]
fn json_tags_and_custom_names() {
	let config = GenerationConfig {
		prefix: Some("t_".to_owned()),
		tag_key: Some("db".to_owned()),
		package_name: Some("entity".to_owned()),
		enable_json_tag: true,
		json_tag_to_camel: true,
		real_name_method: Some("TableName".to_owned()),
		struct_name_to_camel: true,
		..Default::default()
	};
	let rows = vec![
		RawColumn::new("t_order_item", "id", "bigint"),
		RawColumn::new("t_order_item", "order_id", "bigint").comment("owning order"),
	];
	let source = generate(&rows, &config).unwrap();
	assert!(source.starts_with("package entity\n\n"));
	assert!(source.contains("type OrderItemPO struct {"));
	assert!(source.contains("\tOrderId int64 `db:\"order_id\" json:\"orderId\"` // owning order\n"));
	assert!(source.contains("func (OrderItem) TableName() string {\n\treturn \"order_item\"\n}\n"));
	assert!(source.contains("FROM `t_order_item`"));
}

#[test]
fn one_file_per_table() {
	let config = GenerationConfig {
		one_struct_per_file: true,
		..prefixed()
	};
	let rows = vec![
		RawColumn::new("t_user", "id", "int"),
		RawColumn::new("t_user", "born", "date"),
		RawColumn::new("t_post", "id", "int"),
	];
	let files = generate_files(&rows, &config).unwrap();
	let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
	assert_eq!(names, ["User", "Post"]);

	assert!(files[0].source.starts_with("package model\n\nimport \"time\"\n\n"));
	assert!(files[0].source.contains("type UserMySQLRepository struct"));
	assert!(!files[0].source.contains("Post"));

	assert!(!files[1].source.contains("import"));
	assert!(files[1].source.contains("type PostMySQLRepository struct"));
}

#[test]
fn single_file_matches_generate() {
	let files = generate_files(&order_rows(), &prefixed()).unwrap();
	assert_eq!(files.len(), 1);
	assert_eq!(files[0].name, "model");
	assert_eq!(files[0].source, ORDER);
}

#[test]
fn no_partial_output() {
	let rows = vec![
		RawColumn::new("t_ok", "id", "int"),
		RawColumn::new("t_bad", "shape", "geometry"),
	];
	assert!(matches!(
		generate(&rows, &prefixed()),
		Err(Error::UnsupportedColumnType { .. })
	));

	let rows = vec![RawColumn::new("order", "id", "int")];
	assert!(matches!(
		generate(&rows, &prefixed()),
		Err(Error::InvalidIdentifier { .. })
	));

	let rows = vec![RawColumn::new("t_", "id", "int")];
	assert!(matches!(
		generate(&rows, &prefixed()),
		Err(Error::InvalidIdentifier { .. })
	));
}

#[test]
fn bad_config_fails_first() {
	let config = GenerationConfig {
		package_name: Some("not a package".to_owned()),
		..Default::default()
	};
	assert!(matches!(
		generate(&order_rows(), &config),
		Err(Error::Configuration(_))
	));
}

#[test]
fn time_in_a_comment_is_not_an_import() {
	let config = GenerationConfig {
		date_to_time_disabled: true,
		..prefixed()
	};
	let rows = vec![RawColumn::new("t_user", "born", "date").comment("was time.Time")];
	let source = generate(&rows, &config).unwrap();
	assert!(source.starts_with("package model\n\ntype UserPO struct {"));
}

#[test]
fn colliding_field_names_fail() {
	let rows = vec![
		RawColumn::new("t_user", "user_name", "varchar"),
		RawColumn::new("t_user", "userName", "varchar"),
	];
	assert!(matches!(
		generate(&rows, &prefixed()),
		Err(Error::InvalidIdentifier { .. })
	));
}

#[test]
fn keyword_package_is_rejected() {
	let config = GenerationConfig {
		package_name: Some("type".to_owned()),
		..Default::default()
	};
	assert!(matches!(
		generate(&order_rows(), &config),
		Err(Error::Configuration(_))
	));
}

#[test]
fn no_tables_is_just_the_package() {
	assert_eq!(generate(&[], &GenerationConfig::default()).unwrap(), "package model\n\n");
}
