//! Artifact template contents

/// Migration template
pub const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    /**
     * Run the migrations.
     */
    public function up(): void
    {
        Schema::create('{{table_name}}', function (Blueprint $table) {
            {{fields}}
        });
    }

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {
        Schema::dropIfExists('{{table_name}}');
    }
};
"#;

/// Eloquent model template
pub const MODEL: &str = r"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{model_name}} extends Model
{
    use HasFactory;

    protected $fillable = [{{fillable}}];{{defaults}}
}
";

/// Repository interface template
pub const INTERFACE: &str = r"<?php

namespace App\Repositories\Interfaces;

interface {{model_name}}RepositoryInterface
{
    public function all(array $filters = []);

    public function find(int $id);

    public function create(array $data);

    public function update(int $id, array $data);

    public function delete(int $id);
}
";

/// Repository template
pub const REPOSITORY: &str = r#"<?php

namespace App\Repositories;

use App\Models\{{model_name}};
use App\Repositories\Interfaces\{{model_name}}RepositoryInterface;

class {{model_name}}Repository implements {{model_name}}RepositoryInterface
{
    public function all(array $filters = [])
    {
        $query = {{model_name}}::query();

        if (!empty($filters['search'])) {
            $search = $filters['search'];
            $query->where(function ($query) use ($search) {
                {{search_fields}}
            });
        }

        return $query->latest()->paginate($filters['per_page'] ?? 15);
    }

    public function find(int $id)
    {
        return {{model_name}}::findOrFail($id);
    }

    public function create(array $data)
    {
        return {{model_name}}::create($data);
    }

    public function update(int $id, array $data)
    {
        ${{model_variable}} = $this->find($id);
        ${{model_variable}}->update($data);

        return ${{model_variable}};
    }

    public function delete(int $id)
    {
        return $this->find($id)->delete();
    }
}
"#;

/// Service template
pub const SERVICE: &str = r"<?php

namespace App\Services;

use App\Repositories\Interfaces\{{model_name}}RepositoryInterface;

class {{model_name}}Service
{
    public function __construct(
        private {{model_name}}RepositoryInterface ${{model_variable}}Repository
    ) {
    }

    public function list(array $filters = [])
    {
        return $this->{{model_variable}}Repository->all($filters);
    }

    public function find(int $id)
    {
        return $this->{{model_variable}}Repository->find($id);
    }

    public function create(array $data)
    {
        return $this->{{model_variable}}Repository->create($data);
    }

    public function update(int $id, array $data)
    {
        return $this->{{model_variable}}Repository->update($id, $data);
    }

    public function delete(int $id)
    {
        return $this->{{model_variable}}Repository->delete($id);
    }
}
";

/// HTTP controller template
pub const CONTROLLER: &str = r"<?php

namespace App\Http\Controllers;

use App\Services\{{model_name}}Service;
use Illuminate\Http\Request;

class {{model_name}}Controller extends Controller
{
    public function __construct(
        private {{model_name}}Service ${{model_variable}}Service
    ) {
    }

    public function index(Request $request)
    {
        ${{model_variable}}s = $this->{{model_variable}}Service->list(
            $request->only(['search', 'per_page'])
        );

        return response()->json(${{model_variable}}s);
    }

    public function store(Request $request)
    {
        $validated = $request->validate([
{{validation_rules}}
        ]);

        ${{model_variable}} = $this->{{model_variable}}Service->create($validated);

        return response()->json(${{model_variable}}, 201);
    }

    public function show(int $id)
    {
        return response()->json($this->{{model_variable}}Service->find($id));
    }

    public function update(Request $request, int $id)
    {
        $validated = $request->validate([
{{validation_update_rules}}
        ]);

        ${{model_variable}} = $this->{{model_variable}}Service->update($id, $validated);

        return response()->json(${{model_variable}});
    }

    public function destroy(int $id)
    {
        $this->{{model_variable}}Service->delete($id);

        return response()->json(null, 204);
    }
}
";
